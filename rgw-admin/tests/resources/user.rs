use http::Method;
use pretty_assertions::assert_eq;
use rgw_admin::Result;
use serde_json::json;

use crate::mock::{empty, response, v2_client};

#[tokio::test]
async fn test_users_are_listed() -> Result<()> {
    let (client, http) = v2_client(vec![response(200, r#"["foo","bar"]"#)]);

    let resp = client.user().list().await?;
    assert_eq!(resp.value(), Some(&json!(["foo", "bar"])));

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].uri, "http://gateway/admin/metadata/user");
    Ok(())
}

#[tokio::test]
async fn test_user_is_created() -> Result<()> {
    let (client, http) = v2_client(vec![response(
        200,
        r#"{"user_id": "foo", "display_name": "Foo", "keys": []}"#,
    )]);

    let resp = client
        .user()
        .create("foo", "Foo", &[("max-buckets", "10")])
        .await?;
    assert_eq!(resp.get("user_id"), Some(&json!("foo")));

    let requests = http.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(
        requests[0].uri,
        "http://gateway/admin/user?uid=foo&display-name=Foo&max-buckets=10"
    );
    Ok(())
}

#[tokio::test]
async fn test_user_operations_hit_their_endpoints() -> Result<()> {
    let (client, http) = v2_client((0..8).map(|_| empty()).collect());
    let user = client.user();

    user.info("foo", &[]).await?;
    user.modify("foo", &[("suspended", "1")]).await?;
    user.create_subuser("foo", "foo:swift", &[]).await?;
    user.create_key("foo", &[]).await?;
    user.remove_key("AKIA", &[]).await?;
    user.add_capability("foo", "usage=read").await?;
    user.get_quota("foo", "user").await?;
    user.remove("foo", &[]).await?;

    let lines = http
        .requests()
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.uri))
        .collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "GET http://gateway/admin/user?uid=foo",
            "POST http://gateway/admin/user?uid=foo&suspended=1",
            "PUT http://gateway/admin/user?subuser=&uid=foo&subuser=foo%3Aswift",
            "PUT http://gateway/admin/user?key=&uid=foo",
            "DELETE http://gateway/admin/user?key=&access-key=AKIA",
            "PUT http://gateway/admin/user?caps=&uid=foo&user-caps=usage%3Dread",
            "GET http://gateway/admin/user?quota=&uid=foo&quota-type=user",
            "DELETE http://gateway/admin/user?uid=foo",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_user_quota_is_set() -> Result<()> {
    let (client, http) = v2_client(vec![empty()]);

    client
        .user()
        .set_quota("foo", "user", json!({"enabled": true, "max_objects": 1024}))
        .await?;

    let requests = http.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(
        requests[0].uri,
        "http://gateway/admin/user?quota=&uid=foo&quota-type=user"
    );
    assert_eq!(
        requests[0].json(),
        json!({"enabled": true, "max_objects": 1024})
    );
    Ok(())
}
