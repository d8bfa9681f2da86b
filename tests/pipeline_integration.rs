//! End-to-end pipeline tests: walk a mocked thread, bind the collected
//! photos into a PDF, and verify the document against the collection order.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use lopdf::Document;
use tempfile::TempDir;
use threadbind::{ApiClient, Config, PdfAssembler, StatusId, ThreadWalker};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 40, 200]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

async fn mount_status(server: &MockServer, id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/statuses/show.json"))
        .and(query_param("id", id))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_media(server: &MockServer, path_str: &str, width: u32, height: u32) {
    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(width, height)))
        .mount(server)
        .await;
}

fn embedded_widths(pdf_path: &Path) -> Vec<i64> {
    let doc = Document::load(pdf_path).unwrap();
    let mut widths = Vec::new();
    for (_number, page_id) in doc.get_pages() {
        let page = doc.get_dictionary(page_id).unwrap();
        let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
        let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
        let image_ref = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
        let stream = doc.get_object(image_ref).unwrap().as_stream().unwrap();
        widths.push(stream.dict.get(b"Width").unwrap().as_i64().unwrap());
    }
    widths
}

#[tokio::test]
async fn thread_with_photos_becomes_a_pdf_in_reading_order() {
    let server = MockServer::start().await;
    let media_url = |p: &str| format!("{}{}", server.uri(), p);

    // tail(1 photo, width 40) -> mid(1 photo, width 60) -> root
    mount_status(
        &server,
        "3",
        serde_json::json!({
            "id_str": "3",
            "in_reply_to_status_id_str": "2",
            "extended_entities": {
                "media": [{ "media_url": media_url("/m/tail.png"), "type": "photo" }]
            }
        }),
    )
    .await;
    mount_status(
        &server,
        "2",
        serde_json::json!({
            "id_str": "2",
            "in_reply_to_status_id_str": "1",
            "extended_entities": {
                "media": [{ "media_url": media_url("/m/mid.png"), "type": "photo" }]
            }
        }),
    )
    .await;
    mount_status(&server, "1", serde_json::json!({ "id_str": "1" })).await;

    mount_media(&server, "/m/tail.png", 40, 30).await;
    mount_media(&server, "/m/mid.png", 60, 30).await;

    let config = Config {
        api_base_url: server.uri(),
        ..Config::default()
    };
    let client = ApiClient::new(&config).unwrap();
    let walker = ThreadWalker::new(&client);

    let images = walker.collect(&StatusId::new("3")).await.unwrap();
    assert_eq!(images.len(), 2);

    let temp_dir = TempDir::new().unwrap();
    let pdf_path = temp_dir.path().join("thread.pdf");
    PdfAssembler::new().build(images, &pdf_path).unwrap();

    // Two images -> four pages; the mid-status image (nearer the root,
    // width 60 -> halves 30/30) reads before the tail image (40 -> 20/20).
    assert_eq!(embedded_widths(&pdf_path), vec![30, 30, 20, 20]);
}

#[tokio::test]
async fn root_only_thread_collects_nothing_so_no_pdf_is_built() {
    let server = MockServer::start().await;
    let media_url = format!("{}/m/root.png", server.uri());

    // The tail is the root: photos present but never scanned.
    mount_status(
        &server,
        "1",
        serde_json::json!({
            "id_str": "1",
            "extended_entities": {
                "media": [
                    { "media_url": media_url, "type": "photo" },
                    { "media_url": format!("{}/m/root2.png", server.uri()), "type": "photo" },
                ]
            }
        }),
    )
    .await;

    let config = Config {
        api_base_url: server.uri(),
        ..Config::default()
    };
    let client = ApiClient::new(&config).unwrap();

    let images = ThreadWalker::new(&client)
        .collect(&StatusId::new("1"))
        .await
        .unwrap();

    // The entry point branches on this and prints the "no images" message
    // instead of invoking the assembler.
    assert!(images.is_empty());
}
