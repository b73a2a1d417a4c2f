/// The response statuses the site actually emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    OK200,
    Created201,
    NotModified304,
    NotFound404,
    MethodNotAllowed405,
    InternalServerError500,
    NotImplemented501,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::OK200 => 200,
            HttpStatus::Created201 => 201,
            HttpStatus::NotModified304 => 304,
            HttpStatus::NotFound404 => 404,
            HttpStatus::MethodNotAllowed405 => 405,
            HttpStatus::InternalServerError500 => 500,
            HttpStatus::NotImplemented501 => 501,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            HttpStatus::OK200 => "OK",
            HttpStatus::Created201 => "Created",
            HttpStatus::NotModified304 => "Not Modified",
            HttpStatus::NotFound404 => "Not Found",
            HttpStatus::MethodNotAllowed405 => "Method Not Allowed",
            HttpStatus::InternalServerError500 => "Internal Server Error",
            HttpStatus::NotImplemented501 => "Not Implemented",
        }
    }

    pub fn desc(self) -> &'static str {
        match self {
            HttpStatus::OK200 => "The request has succeeded.",
            HttpStatus::Created201 => "The request has been fulfilled and a new resource created.",
            HttpStatus::NotModified304 => "The resource has not changed since the given time.",
            HttpStatus::NotFound404 => "The requested resource could not be found.",
            HttpStatus::MethodNotAllowed405 => {
                "The request method is not supported for the requested resource."
            }
            HttpStatus::InternalServerError500 => {
                "The server encountered an unexpected condition."
            }
            HttpStatus::NotImplemented501 => {
                "The server does not support the functionality required to fulfill the request."
            }
        }
    }
}
