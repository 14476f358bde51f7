mod form_session;

pub use form_session::FormSession;
