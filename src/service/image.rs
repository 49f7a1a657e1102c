use crate::marvel::MarvelClient;

/// Downloads character thumbnails, treating every failure as "no image".
pub struct ImageLoader<'a> {
    marvel_client: &'a MarvelClient,
}

impl<'a> ImageLoader<'a> {
    /// Creates a new instance of [`ImageLoader`]
    pub fn new(marvel_client: &'a MarvelClient) -> Self {
        Self { marvel_client }
    }

    /// Returns the image bytes behind `image_url`
    ///
    /// An empty URL returns `None` without issuing a request. Transport errors and
    /// non-2xx responses are logged and also return `None`.
    pub async fn load(&self, image_url: &str) -> Option<Vec<u8>> {
        if image_url.is_empty() {
            return None;
        }

        match self.marvel_client.get_image(image_url).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("Failed to load image {}: {}", image_url, e);

                None
            }
        }
    }
}
