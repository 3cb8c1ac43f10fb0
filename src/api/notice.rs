//! One-shot user notices ("flash messages")
//!
//! A notice set by a POST handler travels to the next page inside the
//! redirect's query string (`aviso` and `tipo`), and is rendered once there.

use axum::response::Redirect;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Danger,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Danger => "danger",
        }
    }

    fn parse(raw: &str) -> Self {
        match raw {
            "success" => NoticeKind::Success,
            "warning" => NoticeKind::Warning,
            _ => NoticeKind::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Danger,
            message: message.into(),
        }
    }

    /// Redirect to `path`, carrying this notice along.
    pub fn redirect_to(&self, path: &str) -> Redirect {
        Redirect::to(&format!(
            "{}?aviso={}&tipo={}",
            path,
            urlencoding::encode(&self.message),
            self.kind.as_str()
        ))
    }
}

/// Query parameters a redirected page may receive
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub aviso: Option<String>,
    pub tipo: Option<String>,
}

impl NoticeParams {
    pub fn into_notice(self) -> Option<Notice> {
        let message = self.aviso.filter(|m| !m.trim().is_empty())?;
        Some(Notice {
            kind: NoticeKind::parse(self.tipo.as_deref().unwrap_or_default()),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use axum::response::IntoResponse;

    #[test]
    fn redirect_encodes_message() {
        let response = Notice::success("Libro agregado correctamente.")
            .redirect_to("/")
            .into_response();

        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert_eq!(
            location,
            "/?aviso=Libro%20agregado%20correctamente.&tipo=success"
        );
    }

    #[test]
    fn params_without_message_yield_no_notice() {
        assert_eq!(NoticeParams::default().into_notice(), None);
    }

    #[test]
    fn unknown_kind_is_shown_as_danger() {
        let params = NoticeParams {
            aviso: Some("x".into()),
            tipo: Some("bogus".into()),
        };
        assert_eq!(params.into_notice().unwrap().kind, NoticeKind::Danger);
    }
}
