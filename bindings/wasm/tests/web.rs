use focalcrop::{AreaOfInterest, FocalPoint, ImageSize, TargetSize};
use focalcrop_wasm::{compute_crop, compute_focal_crop, crop_query, resized_image_url, to_focal_point};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap()
}

fn error_code(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"code".into())
        .unwrap()
        .as_string()
        .unwrap()
}

#[wasm_bindgen_test]
fn crop_wide_image_to_square() {
    let rect = compute_crop(
        js(&ImageSize::new(100.0, 50.0)),
        js(&AreaOfInterest::point(25.0, 25.0)),
        js(&TargetSize::new(50.0, 50.0)),
    )
    .unwrap();

    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 50.0, 50.0));
}

#[wasm_bindgen_test]
fn focal_crop_clamps_to_bottom() {
    let rect = compute_focal_crop(
        js(&ImageSize::new(50.0, 100.0)),
        js(&FocalPoint::new(50.0, 90.0)),
        js(&TargetSize::new(1.0, 1.0)),
    )
    .unwrap();

    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 50.0, 50.0, 50.0));
}

#[wasm_bindgen_test]
fn focal_point_from_area() {
    let focal = to_focal_point(
        js(&AreaOfInterest::new(0.0, 0.0, 100.0, 50.0)),
        js(&ImageSize::new(200.0, 100.0)),
    )
    .unwrap();

    assert_eq!((focal.x, focal.y), (25.0, 25.0));
}

#[wasm_bindgen_test]
fn query_string_for_focal_point() {
    let query = crop_query(
        js(&ImageSize::new(200.0, 100.0)),
        js(&FocalPoint::CENTER),
        js(&TargetSize::new(2.0, 1.0)),
    )
    .unwrap();

    assert_eq!(query, "crop=0,0,200,100&width=200&height=100");
}

#[wasm_bindgen_test]
fn url_without_options_is_unchanged() {
    let url = resized_image_url("/img.jpg", JsValue::UNDEFINED).unwrap();
    assert_eq!(url, "/img.jpg");
}

#[wasm_bindgen_test]
fn url_with_smart_crop() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Options {
        width: u32,
        height: u32,
        focal_point: FocalPoint,
        image_width: u32,
        image_height: u32,
    }

    let options = Options {
        width: 50,
        height: 50,
        focal_point: FocalPoint::new(25.0, 50.0),
        image_width: 100,
        image_height: 50,
    };
    let url = resized_image_url("/img.jpg", js(&options)).unwrap();

    assert_eq!(url, "/img.jpg?crop=0,0,50,50&width=50&height=50&mode=crop");
}

#[wasm_bindgen_test]
fn invalid_dimensions_return_coded_error() {
    let err = compute_crop(
        js(&ImageSize::new(0.0, 50.0)),
        js(&AreaOfInterest::point(0.0, 0.0)),
        js(&TargetSize::new(1.0, 1.0)),
    )
    .unwrap_err();

    assert_eq!(error_code(&err), "INVALID_DIMENSIONS");
}

#[wasm_bindgen_test]
fn malformed_argument_returns_coded_error() {
    let err = compute_crop(
        JsValue::from_str("wide"),
        js(&AreaOfInterest::point(0.0, 0.0)),
        js(&TargetSize::new(1.0, 1.0)),
    )
    .unwrap_err();

    assert_eq!(error_code(&err), "INVALID_ARGUMENT");
}
