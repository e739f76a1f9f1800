// SPDX-License-Identifier: MPL-2.0
//! Object storage reached over HTTP.
//!
//! The service exposes three endpoints relative to a base URL:
//!
//! - `GET list?prefix=..&pageSize=..[&nextToken=..]` returning
//!   `{"items": [{"path": ".."}], "nextToken": ".."}`
//! - `GET object/<key>` returning the object bytes
//! - `PUT object/<key>` storing the request body

use crate::application::port::{ImageResolver, ImageUploader, StorageLister};
use crate::domain::gallery::{Cursor, FileItem, ListPage, ListRequest};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::{Client, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ListItem>,
    #[serde(default, rename = "nextToken")]
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListItem {
    path: String,
}

#[derive(Debug, Clone)]
pub struct HttpStorage {
    client: Client,
    base_url: Url,
}

impl HttpStorage {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|err| Error::Config(format!("invalid storage URL {base_url:?}: {err}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported storage URL scheme: {}",
                base_url.scheme()
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(concat!("Skyboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::from)?;

        Ok(Self { client, base_url })
    }

    fn list_url(&self, request: &ListRequest) -> Result<Url> {
        let mut url = self.endpoint("list")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("prefix", &request.prefix);
            query.append_pair("pageSize", &request.page_size.to_string());
            if let Some(cursor) = &request.cursor {
                query.append_pair("nextToken", cursor.as_str());
            }
        }
        Ok(url)
    }

    fn object_url(&self, key: &str) -> Result<Url> {
        let mut url = self.endpoint("object")?;
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("storage URL cannot hold paths: {}", self.base_url)))?
            .extend(key.split('/'));
        Ok(url)
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        self.base_url
            .join(name)
            .map_err(|err| Error::Config(format!("invalid storage endpoint {name}: {err}")))
    }
}

fn parse_list_response(body: &[u8]) -> Result<ListPage> {
    let response: ListResponse = serde_json::from_slice(body)?;
    Ok(ListPage {
        items: response
            .items
            .into_iter()
            .map(|item| FileItem::new(item.path))
            .collect(),
        next_cursor: response
            .next_token
            .filter(|token| !token.is_empty())
            .map(Cursor::new),
    })
}

impl StorageLister for HttpStorage {
    fn list(&self, request: ListRequest) -> BoxFuture<'static, Result<ListPage>> {
        let client = self.client.clone();
        let url = self.list_url(&request);
        async move {
            let response = client.get(url?).send().await?.error_for_status()?;
            let body = response.bytes().await?;
            parse_list_response(&body)
        }
        .boxed()
    }
}

impl ImageResolver for HttpStorage {
    fn resolve(&self, path: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
        let client = self.client.clone();
        let url = self.object_url(path);
        async move {
            let response = client.get(url?).send().await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
        .boxed()
    }
}

impl ImageUploader for HttpStorage {
    fn upload(&self, path: String, bytes: Vec<u8>) -> BoxFuture<'static, Result<FileItem>> {
        let client = self.client.clone();
        let url = self.object_url(&path);
        async move {
            let size = bytes.len();
            client.put(url?).body(bytes).send().await?.error_for_status()?;
            tracing::info!(key = %path, size, "uploaded object");
            Ok(FileItem::new(path))
        }
        .boxed()
    }
}
