use focalcrop::{
    AreaOfInterest, CropQuery, FocalCropError, FocalPoint, ImageSize, ResizedImageUrl, TargetSize,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Crop rectangle in source image pixels.
#[wasm_bindgen(js_name = "CropRect")]
#[derive(Debug, Clone, Copy)]
pub struct JsCropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<focalcrop::CropRect> for JsCropRect {
    fn from(rect: focalcrop::CropRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Focal point as percentages of the image width and height.
#[wasm_bindgen(js_name = "FocalPoint")]
#[derive(Debug, Clone, Copy)]
pub struct JsFocalPoint {
    pub x: f64,
    pub y: f64,
}

/// Options for `resizedImageUrl`, passed as a JavaScript object.
///
/// Smart cropping needs `focalPoint`, `imageWidth` and `imageHeight` in
/// addition to `width` and `height`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub focal_point: Option<FocalPoint>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
}

/// Create a JS `Error` with a `code` property.
fn make_error(code: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    let _ = js_sys::Reflect::set(&err, &"code".into(), &JsValue::from_str(code));
    JsValue::from(err)
}

/// Convert a `FocalCropError` into a JS `Error` with a machine-readable `code` property.
fn to_js_error(e: FocalCropError) -> JsValue {
    let code = match &e {
        FocalCropError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
        FocalCropError::DecodeError(_) => "DECODE_ERROR",
        FocalCropError::ZeroDimensions => "ZERO_DIMENSIONS",
        FocalCropError::InvalidMaxDimension => "INVALID_MAX_DIMENSION",
        FocalCropError::ModelLoadError(_) => "MODEL_LOAD_ERROR",
        FocalCropError::History(_) => "HISTORY_ERROR",
    };
    make_error(code, &e.to_string())
}

fn parse<T: DeserializeOwned>(value: JsValue, name: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| make_error("INVALID_ARGUMENT", &format!("invalid {name}: {e}")))
}

fn parse_url_options(options: JsValue) -> Result<UrlOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(UrlOptions::default())
    } else {
        parse(options, "options")
    }
}

/// Compute the largest crop of the target ratio centered on an area of interest.
///
/// @param image - `{ width, height }` of the source image
/// @param interest - `{ x, y, width, height }` in source pixels
/// @param target - `{ width, height }`; only the ratio is used
#[wasm_bindgen(js_name = "computeCrop")]
pub fn compute_crop(image: JsValue, interest: JsValue, target: JsValue) -> Result<JsCropRect, JsValue> {
    let image: ImageSize = parse(image, "image")?;
    let interest: AreaOfInterest = parse(interest, "interest")?;
    let target: TargetSize = parse(target, "target")?;

    focalcrop::compute_crop(image, interest, target)
        .map(JsCropRect::from)
        .map_err(to_js_error)
}

/// Compute the crop around a stored percentage focal point.
///
/// @param image - `{ width, height }` of the source image
/// @param focalPoint - `{ x, y }` in percent
/// @param target - `{ width, height }`
#[wasm_bindgen(js_name = "computeFocalCrop")]
pub fn compute_focal_crop(
    image: JsValue,
    focal_point: JsValue,
    target: JsValue,
) -> Result<JsCropRect, JsValue> {
    let image: ImageSize = parse(image, "image")?;
    let focal_point: FocalPoint = parse(focal_point, "focalPoint")?;
    let target: TargetSize = parse(target, "target")?;

    focalcrop::compute_focal_crop(image, focal_point, target)
        .map(JsCropRect::from)
        .map_err(to_js_error)
}

/// Convert an area of interest into the percentage focal point at its center.
#[wasm_bindgen(js_name = "toFocalPoint")]
pub fn to_focal_point(area: JsValue, image: JsValue) -> Result<JsFocalPoint, JsValue> {
    let area: AreaOfInterest = parse(area, "area")?;
    let image: ImageSize = parse(image, "image")?;

    let focal = focalcrop::to_focal_point(area, image).map_err(to_js_error)?;
    Ok(JsFocalPoint {
        x: focal.x,
        y: focal.y,
    })
}

/// Image-service query string (`crop=X,Y,W,H&width=W&height=H`) for a focal crop.
#[wasm_bindgen(js_name = "cropQuery")]
pub fn crop_query(image: JsValue, focal_point: JsValue, target: JsValue) -> Result<String, JsValue> {
    let image: ImageSize = parse(image, "image")?;
    let focal_point: FocalPoint = parse(focal_point, "focalPoint")?;
    let target: TargetSize = parse(target, "target")?;

    CropQuery::for_focal_point(image, focal_point, target)
        .map(|query| query.to_string())
        .map_err(to_js_error)
}

/// Append resize (and optionally focal crop) parameters to an image URL.
///
/// @param baseUrl - URL of the original image
/// @param options - Optional object with fields: width, height, focalPoint,
///   imageWidth, imageHeight
#[wasm_bindgen(js_name = "resizedImageUrl")]
pub fn resized_image_url(base_url: &str, options: JsValue) -> Result<String, JsValue> {
    let opts = parse_url_options(options)?;

    let mut url = ResizedImageUrl::new(base_url);
    if let Some(width) = opts.width {
        url = url.width(width);
    }
    if let Some(height) = opts.height {
        url = url.height(height);
    }
    if let (Some(focal_point), Some(width), Some(height)) =
        (opts.focal_point, opts.image_width, opts.image_height)
    {
        url = url.smart_crop(focal_point, ImageSize::from((width, height)));
    }

    url.build().map_err(to_js_error)
}
