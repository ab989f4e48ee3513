use crate::api::CharacterId;

/// Which main pane is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Characters,
    Character(CharacterId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Characters => "/".to_string(),
            Route::Character(id) => format!("/characters/{}", id),
        }
    }
}
