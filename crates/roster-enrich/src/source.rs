use std::future::Future;

use crate::SourceError;

/// One external service that derives a single attribute from a name.
///
/// `Ok(None)` means the service answered but had no value for the name.
pub trait AttributeSource: Send + Sync {
  type Value: Send;

  fn lookup<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Self::Value>, SourceError>> + Send + 'a;
}
