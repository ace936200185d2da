/// Describes Photo Quest client specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was rejected on the client side before any request was made.
    Validation,
    /// Request couldn't reach the server or the connection broke mid-flight.
    Transport,
    /// Server processed the request and reported a business error.
    Rejected,
    /// Session token is missing, expired or invalid.
    Unauthorized,
    /// Unknown error.
    Unknown,
}
