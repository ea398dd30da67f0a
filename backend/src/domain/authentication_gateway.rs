//! Authentication gateway service.
//!
//! Translates a [`UserDirectory`] lookup into a response, delivered either by
//! writing to a [`ResponseSink`] or by handing the outcome to a caller-supplied
//! continuation.
//!
//! Both delivery modes are lazy futures: nothing is looked up or written until
//! the caller awaits them, so an outcome can never be observed inside the turn
//! that started the login.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::ports::{LoginResponse, LookupError, ResponseSink, UserDirectory};
use crate::domain::{LoginRequest, UserRecord};

/// Gateway service driving a [`UserDirectory`].
///
/// Cloning is cheap; clones share the directory.
#[derive(Debug)]
pub struct AuthenticationGateway<D> {
    directory: Arc<D>,
}

impl<D> Clone for AuthenticationGateway<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<D> AuthenticationGateway<D> {
    /// Create a gateway backed by `directory`.
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D> AuthenticationGateway<D>
where
    D: UserDirectory,
{
    /// Look up the requested user and write the outcome to `sink`.
    ///
    /// A found user is written as [`LoginResponse::User`], unchanged; a
    /// failed lookup is written as [`LoginResponse::Message`] carrying the
    /// error's message. The sink receives exactly one value per call.
    ///
    /// # Examples
    /// ```
    /// use std::sync::{Arc, Mutex};
    ///
    /// use auth_gateway::domain::AuthenticationGateway;
    /// use auth_gateway::domain::LoginRequest;
    /// use auth_gateway::domain::ports::{FixtureUserDirectory, LoginResponse, ResponseSink};
    ///
    /// #[derive(Default)]
    /// struct Collect(Mutex<Vec<LoginResponse>>);
    ///
    /// impl ResponseSink for Collect {
    ///     fn send(&self, response: LoginResponse) {
    ///         self.0.lock().unwrap().push(response);
    ///     }
    /// }
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let gateway = AuthenticationGateway::new(Arc::new(FixtureUserDirectory));
    /// let sink = Collect::default();
    /// gateway.login(&LoginRequest::new(999), &sink).await;
    /// assert_eq!(
    ///     sink.0.lock().unwrap().as_slice(),
    ///     [LoginResponse::Message("User not found".to_owned())]
    /// );
    /// # });
    /// ```
    pub async fn login<S>(&self, request: &LoginRequest, sink: &S)
    where
        S: ResponseSink + ?Sized,
    {
        let response = match self.authenticate(request).await {
            Ok(record) => LoginResponse::User(record),
            Err(error) => LoginResponse::Message(error.message()),
        };
        sink.send(response);
    }

    /// Look up the requested user and pass the outcome to `continuation`.
    ///
    /// The directory's result is forwarded verbatim: `Ok(record)` on success,
    /// the directory's [`LookupError`] on failure. `sink` is accepted so both
    /// modes share a signature shape; it is never written.
    ///
    /// Returns whatever `continuation` returns.
    pub async fn login_with_callback<S, F, R>(
        &self,
        request: &LoginRequest,
        _sink: &S,
        continuation: F,
    ) -> R
    where
        S: ResponseSink + ?Sized,
        F: FnOnce(Result<UserRecord, LookupError>) -> R,
    {
        continuation(self.authenticate(request).await)
    }

    async fn authenticate(&self, request: &LoginRequest) -> Result<UserRecord, LookupError> {
        let user_id = request.user_id();
        let outcome = self.directory.find_by_id(user_id).await;
        match &outcome {
            Ok(record) => info!(user_id = %user_id, name = record.name(), "login succeeded"),
            Err(error) => info!(user_id = %user_id, %error, "login failed"),
        }
        outcome
    }
}

impl<D> AuthenticationGateway<D>
where
    D: UserDirectory + 'static,
{
    /// Submit a [`login`](Self::login) to the Tokio runtime and return
    /// immediately.
    ///
    /// The sink is written from the spawned task; await the handle to know
    /// when that has happened.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn spawn_login(
        &self,
        request: LoginRequest,
        sink: Arc<dyn ResponseSink>,
    ) -> JoinHandle<()> {
        let gateway = self.clone();
        tokio::spawn(async move { gateway.login(&request, sink.as_ref()).await })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Mutex;

    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::{MockResponseSink, MockUserDirectory};
    use futures::FutureExt;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[derive(Default)]
    struct RecordingSink {
        responses: Mutex<Vec<LoginResponse>>,
    }

    impl RecordingSink {
        fn responses(&self) -> Vec<LoginResponse> {
            self.responses.lock().expect("sink lock").clone()
        }
    }

    impl ResponseSink for RecordingSink {
        fn send(&self, response: LoginResponse) {
            self.responses.lock().expect("sink lock").push(response);
        }
    }

    #[fixture]
    fn request() -> LoginRequest {
        LoginRequest::new(123)
    }

    #[fixture]
    fn user() -> UserRecord {
        UserRecord::new(123, "Obi one")
    }

    fn directory_returning(
        expected: UserId,
        outcome: Result<UserRecord, LookupError>,
    ) -> MockUserDirectory {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_find_by_id()
            .with(eq(expected))
            .times(1)
            .return_once(move |_| outcome);
        directory
    }

    fn gateway(directory: MockUserDirectory) -> AuthenticationGateway<MockUserDirectory> {
        AuthenticationGateway::new(Arc::new(directory))
    }

    #[rstest]
    #[tokio::test]
    async fn login_writes_error_message_when_lookup_fails(request: LoginRequest) {
        let error = LookupError::not_found(123_i64);
        let gateway = gateway(directory_returning(request.user_id(), Err(error.clone())));
        let mut sink = MockResponseSink::new();
        sink.expect_send()
            .with(eq(LoginResponse::Message(error.message())))
            .times(1)
            .return_const(());

        gateway.login(&request, &sink).await;
    }

    #[rstest]
    #[tokio::test]
    async fn login_writes_user_when_lookup_succeeds(request: LoginRequest, user: UserRecord) {
        let gateway = gateway(directory_returning(request.user_id(), Ok(user.clone())));
        let mut sink = MockResponseSink::new();
        sink.expect_send()
            .with(eq(LoginResponse::User(user)))
            .times(1)
            .return_const(());

        gateway.login(&request, &sink).await;
    }

    #[rstest]
    #[tokio::test]
    async fn login_with_callback_forwards_error_verbatim(request: LoginRequest) {
        let error = LookupError::not_found(123_i64);
        let gateway = gateway(directory_returning(request.user_id(), Err(error.clone())));
        let mut sink = MockResponseSink::new();
        sink.expect_send().never();

        let received = gateway
            .login_with_callback(&request, &sink, |outcome| outcome)
            .await;

        assert_eq!(received, Err(error));
    }

    #[rstest]
    #[tokio::test]
    async fn login_with_callback_passes_user(request: LoginRequest, user: UserRecord) {
        let gateway = gateway(directory_returning(request.user_id(), Ok(user.clone())));
        let mut sink = MockResponseSink::new();
        sink.expect_send().never();

        let mut calls = 0;
        gateway
            .login_with_callback(&request, &sink, |outcome| {
                calls += 1;
                assert_eq!(outcome, Ok(user));
            })
            .await;

        assert_eq!(calls, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn login_does_nothing_until_awaited(request: LoginRequest) {
        let gateway = AuthenticationGateway::new(Arc::new(
            crate::domain::ports::FixtureUserDirectory,
        ));
        let sink = RecordingSink::default();

        let mut pending = Box::pin(gateway.login(&request, &sink));
        assert!((&mut pending).now_or_never().is_none());
        assert!(sink.responses().is_empty());

        pending.await;
        assert_eq!(
            sink.responses(),
            vec![LoginResponse::User(UserRecord::new(123, "Obi-wan"))]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn spawn_login_writes_once_from_the_runtime(request: LoginRequest, user: UserRecord) {
        let gateway = gateway(directory_returning(request.user_id(), Ok(user.clone())));
        let sink = Arc::new(RecordingSink::default());

        let handle = gateway.spawn_login(request, Arc::clone(&sink) as Arc<dyn ResponseSink>);
        handle.await.expect("login task completes");

        assert_eq!(sink.responses(), vec![LoginResponse::User(user)]);
    }
}
