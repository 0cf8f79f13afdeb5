pub mod session;

pub use session::PostgresSessionAuthenticator;
