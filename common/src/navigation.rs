//! 画面遷移
//!
//! 解析画面から結果画面へは AnalysisResult を一度だけ値で渡す。
//! URLを直接開いた場合は結果なしで遷移する。

use crate::types::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Ingredients(Option<AnalysisResult>),
}

impl Route {
    pub const HOME_PATH: &'static str = "/";
    pub const INGREDIENTS_PATH: &'static str = "/ingredients";

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => Self::HOME_PATH,
            Route::Ingredients(_) => Self::INGREDIENTS_PATH,
        }
    }

    /// パスから遷移先を復元（ペイロードは復元できないので None）
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            Self::INGREDIENTS_PATH => Route::Ingredients(None),
            _ => Route::Home,
        }
    }

    pub fn payload(&self) -> Option<&AnalysisResult> {
        match self {
            Route::Ingredients(payload) => payload.as_ref(),
            Route::Home => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Ingredients(None).path(), "/ingredients");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/ingredients"), Route::Ingredients(None));
        assert_eq!(Route::from_path("/ingredients/"), Route::Ingredients(None));
        assert_eq!(Route::from_path("/unknown"), Route::Home);
    }

    #[test]
    fn test_direct_navigation_has_no_payload() {
        assert!(Route::from_path("/ingredients").payload().is_none());
    }
}
