//! The contract every JMAP method implements.
//!
//! Methods are written against the typed [`Method`] trait. The registry only
//! sees them through the object-safe [`DynMethod`] view, which every `Method`
//! gets for free: it parses wire arguments into the method's request type and
//! checks that type-erased requests really are of that type before handing
//! them over.

use crate::domain::entities::MailboxSession;
use crate::domain::errors::{DomainError, DomainResult};
use crate::jmap::errors::JmapError;
use crate::jmap::model::{ClientId, JmapResponse};
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::any::{type_name, Any};
use std::fmt;

/// Prefix of the timers published by JMAP methods.
pub const JMAP_PREFIX: &str = "JMAP-";

/// Lazily consumed responses of one method call.
pub type ResponseStream = BoxStream<'static, JmapResponse>;

/// Name a method is routed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodName(&'static str);

impl MethodName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Name a response payload is tagged with on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseName(&'static str);

impl ResponseName {
    pub const ERROR: ResponseName = ResponseName::new("error");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResponseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for ResponseName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// A named JMAP operation with a typed request.
///
/// Implementations hold only shared, immutable collaborators so one instance
/// can serve concurrent calls.
#[async_trait]
pub trait Method: Send + Sync + 'static {
    type Request: DeserializeOwned + Send + 'static;

    fn request_handled(&self) -> MethodName;

    async fn process(
        &self,
        request: Self::Request,
        client_id: ClientId,
        session: &MailboxSession,
    ) -> DomainResult<ResponseStream>;
}

/// Type-erased view of a [`Method`], as stored in the registry.
#[async_trait]
pub trait DynMethod: Send + Sync {
    fn method_name(&self) -> MethodName;

    fn request_type_name(&self) -> &'static str;

    /// Build the typed request from wire arguments. `null` counts as `{}`.
    fn parse_arguments(&self, arguments: Value) -> Result<Box<dyn Any + Send>, JmapError>;

    /// Run the method. Fails with a precondition error when `request` is not
    /// of the method's request type.
    async fn process_erased(
        &self,
        request: Box<dyn Any + Send>,
        client_id: ClientId,
        session: &MailboxSession,
    ) -> Result<ResponseStream, JmapError>;
}

#[async_trait]
impl<M> DynMethod for M
where
    M: Method,
{
    fn method_name(&self) -> MethodName {
        self.request_handled()
    }

    fn request_type_name(&self) -> &'static str {
        type_name::<M::Request>()
    }

    fn parse_arguments(&self, arguments: Value) -> Result<Box<dyn Any + Send>, JmapError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let request: M::Request = serde_json::from_value(arguments)
            .map_err(|e| JmapError::InvalidArguments(e.to_string()))?;
        Ok(Box::new(request))
    }

    async fn process_erased(
        &self,
        request: Box<dyn Any + Send>,
        client_id: ClientId,
        session: &MailboxSession,
    ) -> Result<ResponseStream, JmapError> {
        let request = request.downcast::<M::Request>().map_err(|_| {
            DomainError::Precondition(format!(
                "{} only accepts {}",
                self.request_handled(),
                type_name::<M::Request>()
            ))
        })?;

        Ok(self.process(*request, client_id, session).await?)
    }
}
