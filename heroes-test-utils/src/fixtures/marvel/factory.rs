//! Marvel API payload factories.
//!
//! Builds JSON bodies shaped like the responses of the Marvel Comics API
//! `/v1/public/characters` endpoint. Payloads are plain `serde_json::Value`s so the
//! fixtures stay independent from the crate under test.

use serde_json::{json, Value};

/// Create a mock character record.
///
/// # Arguments
/// - `id` - Marvel character ID
/// - `name` - Character name
/// - `image_path` - Thumbnail path without extension
/// - `extension` - Thumbnail file extension
///
/// # Returns
/// - `Value` - A character record with one comic, series, story, event and url entry
pub fn mock_character(id: i64, name: &str, image_path: &str, extension: &str) -> Value {
    let resource_uri = format!("http://gateway.marvel.com/v1/public/characters/{}", id);

    json!({
        "id": id,
        "name": name,
        "description": format!("Description of {}", name),
        "modified": "2014-04-29T14:18:17-0400",
        "thumbnail": {
            "path": image_path,
            "extension": extension,
        },
        "resourceURI": resource_uri,
        "comics": {
            "available": 1,
            "collectionURI": format!("{}/comics", resource_uri),
            "items": [
                {
                    "resourceURI": "http://gateway.marvel.com/v1/public/comics/21366",
                    "name": "Avengers: The Initiative (2007) #14"
                }
            ],
            "returned": 1
        },
        "series": {
            "available": 1,
            "collectionURI": format!("{}/series", resource_uri),
            "items": [
                {
                    "resourceURI": "http://gateway.marvel.com/v1/public/series/1945",
                    "name": "Avengers: The Initiative (2007 - 2010)"
                }
            ],
            "returned": 1
        },
        "stories": {
            "available": 1,
            "collectionURI": format!("{}/stories", resource_uri),
            "items": [
                {
                    "resourceURI": "http://gateway.marvel.com/v1/public/stories/19947",
                    "name": "Cover #19947",
                    "type": "cover"
                }
            ],
            "returned": 1
        },
        "events": {
            "available": 1,
            "collectionURI": format!("{}/events", resource_uri),
            "items": [
                {
                    "resourceURI": "http://gateway.marvel.com/v1/public/events/269",
                    "name": "Secret Invasion"
                }
            ],
            "returned": 1
        },
        "urls": [
            {
                "type": "detail",
                "url": format!("http://marvel.com/characters/{}", id)
            }
        ]
    })
}

/// Create a successful characters response wrapping the provided records.
///
/// `count` is derived from the number of records, matching what the API reports.
///
/// # Arguments
/// - `offset` - Offset the page was requested with
/// - `limit` - Limit the page was requested with
/// - `total` - Total number of characters the API claims to have
/// - `results` - Character records on this page
pub fn mock_characters_page(offset: u32, limit: u32, total: u32, results: Vec<Value>) -> Value {
    json!({
        "code": 200,
        "status": "Ok",
        "copyright": "© 2018 MARVEL",
        "attributionText": "Data provided by Marvel. © 2018 MARVEL",
        "attributionHTML": "<a href=\"http://marvel.com\">Data provided by Marvel. © 2018 MARVEL</a>",
        "etag": "f0fbae65eb2f8f28bdeea0a29be8749a4e67acb3",
        "data": {
            "offset": offset,
            "limit": limit,
            "total": total,
            "count": results.len(),
            "results": results
        }
    })
}

/// Create an empty page, signalling that no rows exist at `offset`.
pub fn mock_empty_page(offset: u32, limit: u32, total: u32) -> Value {
    mock_characters_page(offset, limit, total, Vec::new())
}

/// Create a response carrying an application-level error code in the JSON body.
///
/// # Arguments
/// - `code` - API result code other than 200
/// - `status` - Human readable status returned alongside the code
pub fn mock_api_error(code: i64, status: &str) -> Value {
    json!({
        "code": code,
        "status": status,
        "copyright": "© 2018 MARVEL",
        "attributionText": "Data provided by Marvel. © 2018 MARVEL",
        "attributionHTML": "",
        "etag": "",
        "data": {
            "offset": 0,
            "limit": 0,
            "total": 0,
            "count": 0,
            "results": []
        }
    })
}

/// Create the body the API returns for rejected credentials.
///
/// The real API sends these with a non-2xx HTTP status and a string `code`.
pub fn mock_invalid_credentials() -> Value {
    json!({
        "code": "InvalidCredentials",
        "message": "That hash, timestamp and key combination is invalid."
    })
}
