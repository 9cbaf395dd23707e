use super::*;

/// Tests a login URL response carrying a URL.
///
/// Expected: Ok with the URL to redirect to
#[tokio::test]
async fn returns_login_url() {
    let api = MockDiscordApi {
        login_url: Some(Ok(LoginUrlDto {
            url: Some("https://discord.com/oauth2/authorize?client_id=1".to_string()),
        })),
        ..MockDiscordApi::default()
    };

    let url = request_login_url(&api).await;

    assert_eq!(
        url,
        Ok("https://discord.com/oauth2/authorize?client_id=1".to_string())
    );
}

/// Tests a successful response without a URL.
///
/// Expected: Err(MissingLoginUrl)
#[tokio::test]
async fn fails_when_url_missing() {
    let api = MockDiscordApi {
        login_url: Some(Ok(LoginUrlDto { url: None })),
        ..MockDiscordApi::default()
    };

    assert_eq!(request_login_url(&api).await, Err(FlowError::MissingLoginUrl));
}

/// Tests a network failure while requesting the URL.
///
/// Verifies the failure is recorded on the flow so it can be shown, and the
/// connect button is re-enabled.
///
/// Expected: Err(Api) and the flow stays on the connect step with the error set
#[tokio::test]
async fn network_failure_is_surfaced_on_flow() {
    let api = MockDiscordApi::default();
    let mut flow = OwnerFlow::default();
    flow.handle_login();
    flow.begin_connect();

    let err = request_login_url(&api).await.unwrap_err();
    flow.connect_failed(err.clone());

    assert!(matches!(err, FlowError::Api(ApiError { status: 500, .. })));
    assert_eq!(flow.step(), OwnerStep::ConnectDiscord);
    assert!(!flow.is_connecting());
    assert_eq!(flow.error(), Some(&err));
}
