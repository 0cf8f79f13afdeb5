/// The principal behind a verified session. Sessions are minted by the
/// external identity service; only verification happens in this crate.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
}
