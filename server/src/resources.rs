use axum::response::IntoResponse;
use routify::binding::{endpoint, handler, Flow, Handler, Request, Response};
use routify::Router;

pub fn build() -> Router<Handler> {
    let mut orders = Router::named("orders").with_param("orderId");
    orders
        .list([trace(), describe("orders")])
        .post([trace(), require_json(), describe("orders")])
        .get([trace(), describe("order")])
        .del([trace(), describe("order")]);

    let mut accounts = Router::named("accounts").with_param("accountId");
    accounts
        .list([trace(), describe("accounts")])
        .post([trace(), require_json(), describe("accounts")])
        .get([trace(), describe("account")])
        .put([trace(), require_json(), describe("account")])
        .patch([trace(), require_json(), describe("account")])
        .del([trace(), describe("account")]);
    accounts.extend(&orders);

    let mut api = Router::named("api");
    api.extend(&accounts);

    let mut root = Router::root();
    root.list([trace(), endpoint(|_| async { "ok" })]);
    root.extend(&api);

    root
}

fn trace() -> Handler {
    handler(|request: Request| async move {
        tracing::info!(method = %request.method(), path = %request.uri().path(), "Request");
        Flow::Next(request)
    })
}

fn require_json() -> Handler {
    handler(|request: Request| async move {
        let is_json = request
            .headers()
            .get(hyper::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |value| value.starts_with("application/json"));

        if is_json {
            Flow::Next(request)
        } else {
            Flow::Done(hyper::StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response())
        }
    })
}

fn describe(resource: &'static str) -> Handler {
    endpoint(move |request| describe_request(resource, request))
}

async fn describe_request(resource: &'static str, request: Request) -> Response {
    use axum::extract::FromRequestParts;

    let (mut parts, _) = request.into_parts();
    let params = match axum::extract::Path::<std::collections::BTreeMap<String, String>>::from_request_parts(
        &mut parts,
        &(),
    )
    .await
    {
        Ok(axum::extract::Path(params)) => params,
        Err(rejection) => return rejection.into_response(),
    };

    axum::Json(serde_json::json!({
        "resource": resource,
        "method": parts.method.as_str(),
        "params": params,
    }))
    .into_response()
}
