//! Request dispatch over a fixed, ordered route table.
//!
//! Routes are tried in order and the first matching pattern handles the
//! request:
//!
//! | Pattern        | Handler                                  |
//! |----------------|------------------------------------------|
//! | `/`            | 200, empty body                          |
//! | `/user-agent`  | 200, `User-Agent` header echoed          |
//! | `/echo/<text>` | 200, `<text>` verbatim                   |
//! | `/files/<name>`| GET reads, POST writes the served file   |
//! | anything else  | 404 "Not Found"                          |

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::files::ServedDir;
use crate::routing::matcher::{PathPattern, PatternError};

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Root,
    UserAgent,
    Echo,
    Files,
}

#[derive(Debug)]
struct Route {
    pattern: PathPattern,
    handler: Handler,
}

#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    files: ServedDir,
}

impl Router {
    /// Builds the route table, compiling every pattern once.
    pub fn new(files: ServedDir) -> Result<Self, PatternError> {
        let routes = vec![
            Route {
                pattern: PathPattern::exact("/")?,
                handler: Handler::Root,
            },
            Route {
                pattern: PathPattern::exact("/user-agent")?,
                handler: Handler::UserAgent,
            },
            Route {
                pattern: PathPattern::prefixed("/echo/")?,
                handler: Handler::Echo,
            },
            Route {
                pattern: PathPattern::prefixed("/files/")?,
                handler: Handler::Files,
            },
        ];

        Ok(Self { routes, files })
    }

    pub fn served_dir(&self) -> &ServedDir {
        &self.files
    }

    /// Produces the response for `req`.
    ///
    /// Filesystem failures become 404 (read) or 500 (write) responses; this
    /// never returns an error.
    pub async fn dispatch(&self, req: &Request) -> Response {
        for route in &self.routes {
            let Some(captures) = route.pattern.matches(&req.target) else {
                continue;
            };
            let captured = captures.first().copied().unwrap_or_default();

            return match route.handler {
                Handler::Root => Response::ok(Vec::<u8>::new()),
                Handler::UserAgent => Response::ok(req.header("User-Agent").unwrap_or_default()),
                Handler::Echo => Response::ok(captured),
                Handler::Files => self.serve_file(req, captured).await,
            };
        }

        Response::not_found()
    }

    async fn serve_file(&self, req: &Request, name: &str) -> Response {
        if !matches!(req.method, Method::GET | Method::POST) {
            return Response::not_found();
        }

        let Some(path) = self.files.resolve(name) else {
            tracing::warn!(
                method = %req.method,
                name = %name,
                "Rejected file name outside served directory"
            );
            return Response::not_found();
        };

        match req.method {
            Method::GET => match self.files.read(&path).await {
                Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", OCTET_STREAM)
                    .body(contents)
                    .build(),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "File read failed");
                    Response::not_found()
                }
            },
            _ => match self.files.write(&path, &req.body).await {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), bytes = req.body.len(), "File written");
                    ResponseBuilder::new(StatusCode::Created)
                        .header("Content-Type", OCTET_STREAM)
                        .build()
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "File write failed");
                    Response::internal_error()
                }
            },
        }
    }
}
