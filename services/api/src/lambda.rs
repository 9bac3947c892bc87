//! API Gateway adapter. Proxy events are decoded by `lambda_http`, handed to
//! the same [`SubmissionProxy`] the HTTP server uses, and the reply is
//! rebuilt as a Lambda HTTP response.

use lambda_http::{Body, Error, Request, Response};

use crate::proxy::{ProxyReply, SubmissionProxy};

pub async fn handle_event(proxy: &SubmissionProxy, request: Request) -> Result<Response<Body>, Error> {
    let body: &[u8] = request.body().as_ref();
    let reply = proxy.handle(request.method(), body).await;
    into_lambda_response(reply)
}

pub fn into_lambda_response(reply: ProxyReply) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(reply.status);
    if let Some(headers) = builder.headers_mut() {
        headers.extend(reply.headers());
    }

    let body = match reply.body {
        Some(_) => Body::from(reply.body_string()),
        None => Body::Empty,
    };

    Ok(builder.body(body)?)
}
