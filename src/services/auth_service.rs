use crate::dto::auth_dto::{LoginPayload, SignUpPayload};
use crate::error::{Error, Result};
use crate::models::user::{Role, Session, User};
use crate::storage::{Store, CURRENT_USER_KEY, USERS_KEY};
use crate::utils::{time, validation};
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@talenthub.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_USER_ID: &str = "admin";

const CONSUMER_EMAIL_MESSAGE: &str = "Please enter a valid Gmail address (@gmail.com)";

/// Mock authentication over the local store.
///
/// There is no password storage: regular accounts log in with any password
/// once their email is registered. Only the built-in administrator pair is
/// checked. This is not a security boundary.
#[derive(Clone)]
pub struct AuthService {
    store: Store,
}

impl AuthService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn users(&self) -> Vec<User> {
        self.store.read(USERS_KEY)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        let email = email.to_lowercase();
        self.users()
            .into_iter()
            .find(|u| u.email.to_lowercase() == email)
    }

    pub fn sign_up(&self, payload: SignUpPayload) -> Result<User> {
        let first_name = payload.first_name.trim();
        let last_name = payload.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(Error::InvalidInput(
                "First name and last name are required".to_string(),
            ));
        }
        if !validation::is_consumer_email(&payload.email) {
            return Err(Error::InvalidInput(CONSUMER_EMAIL_MESSAGE.to_string()));
        }
        validation::check_password(&payload.password).map_err(Error::InvalidInput)?;
        if payload.password != payload.confirm_password {
            return Err(Error::InvalidInput("Passwords do not match".to_string()));
        }

        let mut users = self.users();
        let email = payload.email.to_lowercase();
        if users.iter().any(|u| u.email.to_lowercase() == email) {
            return Err(Error::InvalidInput(
                "An account with this email already exists".to_string(),
            ));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: Role::User,
            created_at: time::now(),
        };
        users.push(user.clone());
        self.store.write(USERS_KEY, &users)?;
        self.set_current_user(&user)?;

        tracing::info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    /// Signs in and replaces any previous session.
    ///
    /// Non-admin passwords are NOT verified: a registered consumer email is
    /// enough. Kept deliberately until product decides otherwise.
    pub fn login(&self, payload: LoginPayload) -> Result<User> {
        if payload.email.eq_ignore_ascii_case(ADMIN_EMAIL) && payload.password == ADMIN_PASSWORD {
            let admin = User {
                id: ADMIN_USER_ID.to_string(),
                email: ADMIN_EMAIL.to_string(),
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                role: Role::Admin,
                created_at: time::now(),
            };
            self.set_current_user(&admin)?;
            tracing::info!("Administrator signed in");
            return Ok(admin);
        }

        if !validation::is_consumer_email(&payload.email) {
            return Err(Error::InvalidInput(CONSUMER_EMAIL_MESSAGE.to_string()));
        }

        let user = self
            .find_user_by_email(&payload.email)
            .ok_or_else(|| Error::Unauthorized("Invalid email or password".to_string()))?;

        tracing::warn!(user_id = %user.id, "Password not verified for regular account login");
        self.set_current_user(&user)?;
        Ok(user)
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear(CURRENT_USER_KEY)?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn session(&self) -> Session {
        Session::from(self.store.read_value::<User>(CURRENT_USER_KEY))
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().into_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_active()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().map_or(false, |u| u.is_admin())
    }

    pub fn require_user(&self) -> Result<User> {
        self.current_user()
            .ok_or_else(|| Error::Unauthorized("Please sign in first".to_string()))
    }

    pub fn require_admin(&self) -> Result<User> {
        let user = self.require_user()?;
        if !user.is_admin() {
            return Err(Error::Forbidden(
                "Administrator access is required".to_string(),
            ));
        }
        Ok(user)
    }

    fn set_current_user(&self, user: &User) -> Result<()> {
        self.store.write_value(CURRENT_USER_KEY, user)
    }
}
