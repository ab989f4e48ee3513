use std::sync::mpsc::Sender;
use std::sync::Arc;

use tracing::debug;

use crate::api::{CharacterApi, CharacterDetail, CharacterId, FetchError};
use crate::characters::{
    fetch_characters, initial_load, CharactersDispatcher, CharactersState, CharactersStore,
};
use crate::mvi::Reducer;
use crate::ui::character_view::{CharacterViewIntent, CharacterViewReducer, CharacterViewState};
use crate::ui::events::AppEvent;
use crate::ui::route::Route;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application shell.
///
/// Owns the character list store and hands its dispatcher to workflows.
/// `list` is the snapshot the view renders; it is refreshed whenever the
/// store reports a change through [`AppEvent::StateChanged`].
pub struct App {
    should_quit: bool,
    store: CharactersStore,
    dispatcher: CharactersDispatcher,
    api: Arc<dyn CharacterApi>,
    events: Sender<AppEvent>,
    list: CharactersState,
    selection: usize,
    route: Route,
    /// Detail view local state (MVI pattern, not part of the store).
    character_view: CharacterViewState,
}

impl App {
    pub fn new(api: Arc<dyn CharacterApi>, events: Sender<AppEvent>) -> Self {
        let store = CharactersStore::default();
        let notify = events.clone();
        store.subscribe(move |_: &CharactersState| {
            let _ = notify.send(AppEvent::StateChanged);
        });

        Self {
            should_quit: false,
            dispatcher: store.dispatcher(),
            list: store.state(),
            store,
            api,
            events,
            selection: 0,
            route: Route::default(),
            character_view: CharacterViewState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Initial mount.
    pub fn mount(&mut self, fetch_on_start: bool) {
        self.dispatcher
            .dispatch(initial_load(Arc::clone(&self.api), fetch_on_start));
        self.sync_list();
    }

    /// "Fetch Characters" button.
    pub fn request_fetch(&mut self) {
        self.dispatcher
            .dispatch(fetch_characters(Arc::clone(&self.api)));
        self.sync_list();
    }

    pub fn on_state_changed(&mut self) {
        self.sync_list();
    }

    pub fn characters(&self) -> &CharactersState {
        &self.list
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.list.characters.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn character_view(&self) -> &CharacterViewState {
        &self.character_view
    }

    pub fn open_selected(&mut self) {
        let Some(id) = self
            .list
            .characters
            .get(self.selection)
            .map(|character| character.id.clone())
        else {
            return;
        };
        self.open_character(id);
    }

    /// Navigate to `characters/:id` and request the detail.
    ///
    /// Every call issues its own request; earlier ones are not cancelled.
    pub fn open_character(&mut self, id: CharacterId) {
        if self.route == Route::Character(id.clone()) {
            return;
        }
        self.route = Route::Character(id.clone());
        dispatch_mvi!(
            self,
            character_view,
            CharacterViewReducer,
            CharacterViewIntent::Open { id: id.clone() }
        );

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            debug!(%id, "requesting character detail");
            let result = api.character(&id).await;
            let _ = events.send(AppEvent::CharacterLoaded { id, result });
        });
    }

    pub fn on_character_loaded(
        &mut self,
        id: CharacterId,
        result: Result<CharacterDetail, FetchError>,
    ) {
        dispatch_mvi!(
            self,
            character_view,
            CharacterViewReducer,
            CharacterViewIntent::from_outcome(id, result)
        );
    }

    /// Leave the detail route.
    pub fn back(&mut self) {
        self.route = Route::Characters;
        dispatch_mvi!(self, character_view, CharacterViewReducer, CharacterViewIntent::Close);
    }

    fn sync_list(&mut self) {
        self.list = self.store.state();
        let len = self.list.characters.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
