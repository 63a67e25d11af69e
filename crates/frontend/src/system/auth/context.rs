use contracts::system::auth::Identity;
use leptos::prelude::*;

/// Holds the authenticated identity for the lifetime of the app.
///
/// One instance is created in `App` and handed to every consumer as a prop.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current: RwSignal<Option<Identity>>,
    authenticated: Memo<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        let current = RwSignal::new(None::<Identity>);
        let authenticated = Memo::new(move |_| current.with(|identity| identity.is_some()));
        Self {
            current,
            authenticated,
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.current.get()
    }

    /// Derived from `current`; re-evaluated on the next read after any mutation.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn authenticated(&self) -> Memo<bool> {
        self.authenticated
    }

    /// Replace the current identity. No validation happens here.
    pub fn login(&self, identity: Identity) {
        log::info!("session: login as {} <{}>", identity.name, identity.email);
        self.current.set(Some(identity));
    }

    pub fn logout(&self) {
        log::info!("session: logout");
        self.current.set(None);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ray() -> Identity {
        Identity::new(1, "ray", "ray@example.com")
    }

    #[test]
    fn test_starts_anonymous() {
        let session = SessionStore::new();
        assert_eq!(session.current(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_replaces_identity() {
        let session = SessionStore::new();
        session.login(ray());
        let other = Identity::new(2, "ana", "ana@example.com").with_password("secreto123");
        session.login(other.clone());
        assert_eq!(session.current(), Some(other));
        assert!(session.is_authenticated());
    }

    proptest! {
        #[test]
        fn prop_authenticated_tracks_last_call(calls in proptest::collection::vec(any::<bool>(), 1..64)) {
            let session = SessionStore::new();
            for login in calls {
                if login {
                    session.login(ray());
                } else {
                    session.logout();
                }
                prop_assert_eq!(session.is_authenticated(), login);
                prop_assert_eq!(session.current().is_some(), login);
            }
        }
    }
}
