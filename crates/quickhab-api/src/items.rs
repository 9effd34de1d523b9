// Item endpoints: listing, tag membership, and commands.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::client::{Method, RestClient};
use crate::error::Error;
use crate::models::RemoteItem;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

impl RestClient {
    /// Fetch every item, including the `quickhab_name` metadata namespace.
    pub async fn list_items(&self) -> Result<Vec<RemoteItem>, Error> {
        let body = self
            .call(Method::Get, "/items?metadata=quickhab_name", None)
            .await?;

        serde_json::from_slice(&body).map_err(|e| {
            let text = String::from_utf8_lossy(&body);
            Error::Deserialization {
                message: e.to_string(),
                body: text.chars().take(200).collect(),
            }
        })
    }

    /// Attach `tag` to the item. The response body is ignored.
    pub async fn add_tag(&self, item: &str, tag: &str) -> Result<(), Error> {
        let endpoint = format!("/items/{}/tags/{}", segment(item), segment(tag));
        self.call(Method::Put, &endpoint, None).await.map(drop)
    }

    /// Detach `tag` from the item. The response body is ignored.
    pub async fn remove_tag(&self, item: &str, tag: &str) -> Result<(), Error> {
        let endpoint = format!("/items/{}/tags/{}", segment(item), segment(tag));
        self.call(Method::Delete, &endpoint, None).await.map(drop)
    }

    /// Send a plain-text command (e.g. `ON`) to the item.
    pub async fn send_command(&self, item: &str, command: &str) -> Result<(), Error> {
        let endpoint = format!("/items/{}", segment(item));
        self.call(Method::Post, &endpoint, Some(command))
            .await
            .map(drop)
    }
}
