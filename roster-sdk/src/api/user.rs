use crate::model::user::{NewUser, UserRecord};
use crate::Result;

/// The remote user collection.
///
/// Every call is a single attempt. Any status outside 2xx and any transport
/// failure comes back as an error; nothing is retried.
#[async_trait::async_trait(?Send)]
pub trait UserApi {
    /// GET the whole collection in server order
    async fn list(&self) -> Result<Vec<UserRecord>>;

    /// POST a candidate, the server assigns the id
    async fn create(&self, candidate: NewUser) -> Result<UserRecord>;

    /// PUT a full replacement of the record at `id`
    async fn update(&self, id: u64, candidate: NewUser) -> Result<UserRecord>;

    /// DELETE the record at `id`, any 2xx counts
    async fn remove(&self, id: u64) -> Result<()>;
}
