//! Typed options for every tool.
//!
//! Absent fields take the documented default through serde; a value that is
//! present is used as sent, including `0` and `false`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::gradient::{black_to_white, ColorStop, OpacityStop};
use crate::build::path::PathVertex;
use crate::model::{Bounds, Point, RgbColor};
use crate::resolve::TargetRef;

fn yes() -> bool {
    true
}

fn zero() -> f64 {
    0.0
}

fn one() -> f64 {
    1.0
}

fn ten() -> f64 {
    10.0
}

fn fifty() -> f64 {
    50.0
}

fn hundred() -> f64 {
    100.0
}

fn black() -> RgbColor {
    RgbColor::BLACK
}

fn white() -> RgbColor {
    RgbColor::WHITE
}

fn red() -> RgbColor {
    RgbColor::RED
}

fn glow_color() -> RgbColor {
    RgbColor::rgb(255, 255, 190)
}

fn normal() -> String {
    "normal".to_string()
}

fn multiply() -> String {
    "multiply".to_string()
}

fn screen() -> String {
    "screen".to_string()
}

fn linear() -> String {
    "linear".to_string()
}

fn composite() -> String {
    "composite".to_string()
}

fn alpha_1() -> String {
    "Alpha 1".to_string()
}

fn none() -> String {
    "none".to_string()
}

fn origin() -> Point {
    Point::new(0.0, 0.0)
}

fn far_corner() -> Point {
    Point::new(100.0, 100.0)
}

fn diagonal() -> Vec<Point> {
    vec![origin(), far_corner()]
}

// ── Shared ──────────────────────────────────────────────────────

/// Tools whose only option is the layer to act on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayerParams {
    /// Layer id or name. Omit to use the active layer.
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelpParams {
    /// Category slug or tool name. Omit to list categories.
    #[serde(default)]
    pub topic: Option<String>,
}

// ── Document ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveDocumentParams {
    /// Document id or name.
    pub document_id: TargetRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateDocumentParams {
    pub name: String,
}

fn automatic() -> String {
    "automatic".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResizeImageParams {
    /// Pixels. Absent or 0 keeps the host's computed value.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    /// Pixels per inch.
    #[serde(default)]
    pub resolution: Option<f64>,
    /// automatic, nearestNeighbor, bilinear, bicubic, bicubicSmoother,
    /// bicubicSharper, preserveDetails.
    #[serde(default = "automatic")]
    pub interpolation: String,
    #[serde(default = "yes")]
    pub constrain: bool,
}

fn middle_center() -> String {
    "MIDDLECENTER".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResizeCanvasParams {
    pub width: f64,
    pub height: f64,
    /// TOPLEFT, TOPCENTER, ..., MIDDLECENTER, ..., BOTTOMRIGHT.
    #[serde(default = "middle_center")]
    pub anchor: String,
    /// Fill for the added canvas. Omit for the host default.
    #[serde(default)]
    pub color: Option<RgbColor>,
}

fn ninety() -> f64 {
    90.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotateCanvasParams {
    /// Degrees, clockwise.
    #[serde(default = "ninety")]
    pub angle: f64,
}

fn transparent() -> String {
    "transparent".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrimDocumentParams {
    /// transparent, topLeft or bottomRight.
    #[serde(default = "transparent")]
    pub trim_type: String,
    #[serde(default = "yes")]
    pub top: bool,
    #[serde(default = "yes")]
    pub left: bool,
    #[serde(default = "yes")]
    pub bottom: bool,
    #[serde(default = "yes")]
    pub right: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlignContentParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// LEFT, CENTER_HORIZONTAL, RIGHT, TOP, CENTER_VERTICAL, BOTTOM.
    pub alignment_mode: String,
}

/// Foreground defaults to black, background to white.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorParams {
    #[serde(default)]
    pub color: Option<RgbColor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameLayerParams {
    pub layer_id: TargetRef,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityParams {
    pub layer_id: TargetRef,
    #[serde(default = "yes")]
    pub visible: bool,
}

fn untitled() -> String {
    "Untitled-1".to_string()
}

fn seventy_two() -> f64 {
    72.0
}

fn rgb_mode() -> String {
    "RGB".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentParams {
    #[serde(default = "untitled")]
    pub name: String,
    /// Pixels.
    pub width: f64,
    pub height: f64,
    /// Pixels per inch.
    #[serde(default = "seventy_two")]
    pub resolution: f64,
    /// Background fill.
    #[serde(default = "black")]
    pub fill_color: RgbColor,
    /// RGB, CMYK, grayscale, Lab or bitmap.
    #[serde(default = "rgb_mode")]
    pub color_mode: String,
}

// ── Adjustment layers ───────────────────────────────────────────

/// Grayscale contribution of each hue, -200..300.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrayMix {
    #[serde(default = "bw_red")]
    pub red: f64,
    #[serde(default = "bw_yellow")]
    pub yellow: f64,
    #[serde(default = "bw_green")]
    pub green: f64,
    #[serde(default = "bw_cyan")]
    pub cyan: f64,
    #[serde(default = "bw_blue")]
    pub blue: f64,
    #[serde(default = "bw_magenta")]
    pub magenta: f64,
}

fn bw_red() -> f64 {
    40.0
}
fn bw_yellow() -> f64 {
    60.0
}
fn bw_green() -> f64 {
    40.0
}
fn bw_cyan() -> f64 {
    60.0
}
fn bw_blue() -> f64 {
    20.0
}
fn bw_magenta() -> f64 {
    80.0
}

impl Default for GrayMix {
    fn default() -> Self {
        Self {
            red: bw_red(),
            yellow: bw_yellow(),
            green: bw_green(),
            cyan: bw_cyan(),
            blue: bw_blue(),
            magenta: bw_magenta(),
        }
    }
}

fn sepia() -> RgbColor {
    RgbColor::rgb(225, 211, 179)
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlackAndWhiteParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub colors: GrayMix,
    #[serde(default)]
    pub tint: bool,
    #[serde(default = "sepia")]
    pub tint_color: RgbColor,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrightnessContrastParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// -150..150
    #[serde(default)]
    pub brightness: f64,
    /// -50..100
    #[serde(default)]
    pub contrast: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VibranceParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub vibrance: f64,
    #[serde(default)]
    pub saturation: f64,
}

/// Cyan-red, magenta-green and yellow-blue shifts, each -100..100.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorBalanceParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub highlights: [f64; 3],
    #[serde(default)]
    pub midtones: [f64; 3],
    #[serde(default)]
    pub shadows: [f64; 3],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct CurvePoint {
    pub input: f64,
    pub output: f64,
}

fn identity_curve() -> Vec<CurvePoint> {
    vec![
        CurvePoint {
            input: 0.0,
            output: 0.0,
        },
        CurvePoint {
            input: 255.0,
            output: 255.0,
        },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurvesParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// composite, red, green or blue.
    #[serde(default = "composite")]
    pub channel: String,
    #[serde(default = "identity_curve")]
    pub points: Vec<CurvePoint>,
}

fn full_level() -> f64 {
    255.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LevelsParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "composite")]
    pub channel: String,
    #[serde(default = "zero")]
    pub input_shadow: f64,
    #[serde(default = "full_level")]
    pub input_highlight: f64,
    /// Gamma, 0.1..9.99.
    #[serde(default = "one")]
    pub input_midtone: f64,
    #[serde(default = "zero")]
    pub output_shadow: f64,
    #[serde(default = "full_level")]
    pub output_highlight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HueSaturationParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub hue: f64,
    #[serde(default)]
    pub saturation: f64,
    #[serde(default)]
    pub lightness: f64,
    #[serde(default)]
    pub colorize: bool,
}

fn warming_filter() -> RgbColor {
    RgbColor::rgb(236, 138, 0)
}

fn twenty_five() -> f64 {
    25.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoFilterParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "warming_filter")]
    pub color: RgbColor,
    #[serde(default = "twenty_five")]
    pub density: f64,
    #[serde(default = "yes")]
    pub preserve_luminosity: bool,
}

fn red_channel() -> String {
    "red".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMixerParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "red_channel")]
    pub output_channel: String,
    #[serde(default = "hundred")]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
    #[serde(default)]
    pub constant: f64,
    #[serde(default)]
    pub monochrome: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradientMapParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Locations are percents.
    #[serde(default = "black_to_white")]
    pub color_stops: Vec<ColorStop>,
    #[serde(default)]
    pub reverse: bool,
}

fn four() -> u32 {
    4
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PosterizeParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// 2..255
    #[serde(default = "four")]
    pub levels: u32,
}

fn mid_level() -> u32 {
    128
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// 1..255
    #[serde(default = "mid_level")]
    pub level: u32,
}

fn reds() -> String {
    "reds".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectiveColorParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// reds, yellows, greens, cyans, blues, magentas, whites, neutrals, blacks.
    #[serde(default = "reds")]
    pub colors: String,
    #[serde(default)]
    pub cyan: f64,
    #[serde(default)]
    pub magenta: f64,
    #[serde(default)]
    pub yellow: f64,
    #[serde(default)]
    pub black: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExposureParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub exposure: f64,
    #[serde(default)]
    pub offset: f64,
    #[serde(default = "one")]
    pub gamma: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolidColorFillParams {
    /// The fill layer is created above this layer. Omit for the active layer.
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "red")]
    pub color: RgbColor,
}

// ── Layer styles ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradientLayerStyleParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "ninety")]
    pub angle: f64,
    /// linear, radial, angle, reflected or diamond.
    #[serde(rename = "type", alias = "gradientType", default = "linear")]
    pub gradient_type: String,
    #[serde(default = "black_to_white")]
    pub color_stops: Vec<ColorStop>,
    /// Omit for fully opaque stops at each color stop's location.
    #[serde(default)]
    pub opacity_stops: Option<Vec<OpacityStop>>,
}

fn two() -> f64 {
    2.0
}

fn center() -> String {
    "CENTER".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyleParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "two")]
    pub size: f64,
    #[serde(default = "black")]
    pub color: RgbColor,
    #[serde(default = "hundred")]
    pub opacity: f64,
    /// INSIDE, CENTER or OUTSIDE.
    #[serde(default = "center")]
    pub position: String,
    #[serde(default = "normal")]
    pub blend_mode: String,
}

fn shadow_opacity() -> f64 {
    35.0
}

fn shadow_angle() -> f64 {
    160.0
}

fn three() -> f64 {
    3.0
}

fn seven() -> f64 {
    7.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DropShadowParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "multiply")]
    pub blend_mode: String,
    #[serde(default = "black")]
    pub color: RgbColor,
    #[serde(default = "shadow_opacity")]
    pub opacity: f64,
    #[serde(default = "shadow_angle")]
    pub angle: f64,
    #[serde(default = "three")]
    pub distance: f64,
    #[serde(default = "zero")]
    pub spread: f64,
    #[serde(default = "seven")]
    pub size: f64,
}

fn seventy_five() -> f64 {
    75.0
}

fn light_angle() -> f64 {
    120.0
}

fn five() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InnerShadowParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "multiply")]
    pub blend_mode: String,
    #[serde(default = "black")]
    pub color: RgbColor,
    #[serde(default = "seventy_five")]
    pub opacity: f64,
    #[serde(default = "light_angle")]
    pub angle: f64,
    #[serde(default = "five")]
    pub distance: f64,
    #[serde(default = "zero")]
    pub choke: f64,
    #[serde(default = "five")]
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OuterGlowParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "screen")]
    pub blend_mode: String,
    #[serde(default = "glow_color")]
    pub color: RgbColor,
    #[serde(default = "seventy_five")]
    pub opacity: f64,
    #[serde(default = "zero")]
    pub spread: f64,
    #[serde(default = "five")]
    pub size: f64,
    #[serde(default = "zero")]
    pub noise: f64,
}

fn edge() -> String {
    "edge".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InnerGlowParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "screen")]
    pub blend_mode: String,
    #[serde(default = "glow_color")]
    pub color: RgbColor,
    #[serde(default = "seventy_five")]
    pub opacity: f64,
    #[serde(default = "zero")]
    pub choke: f64,
    #[serde(default = "five")]
    pub size: f64,
    /// edge or center.
    #[serde(default = "edge")]
    pub source: String,
    #[serde(default = "zero")]
    pub noise: f64,
}

fn inner_bevel() -> String {
    "innerBevel".to_string()
}

fn smooth() -> String {
    "smooth".to_string()
}

fn up() -> String {
    "up".to_string()
}

fn thirty() -> f64 {
    30.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BevelEmbossParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// outerBevel, innerBevel, emboss, pillowEmboss, strokeEmboss.
    #[serde(default = "inner_bevel")]
    pub style: String,
    /// smooth, chiselHard, chiselSoft.
    #[serde(default = "smooth")]
    pub technique: String,
    #[serde(default = "hundred")]
    pub depth: f64,
    /// up or down.
    #[serde(default = "up")]
    pub direction: String,
    #[serde(default = "five")]
    pub size: f64,
    #[serde(default = "zero")]
    pub soften: f64,
    #[serde(default = "light_angle")]
    pub angle: f64,
    #[serde(default = "thirty")]
    pub altitude: f64,
    #[serde(default = "screen")]
    pub highlight_mode: String,
    #[serde(default = "white")]
    pub highlight_color: RgbColor,
    #[serde(default = "seventy_five")]
    pub highlight_opacity: f64,
    #[serde(default = "multiply")]
    pub shadow_mode: String,
    #[serde(default = "black")]
    pub shadow_color: RgbColor,
    #[serde(default = "seventy_five")]
    pub shadow_opacity: f64,
}

fn satin_angle() -> f64 {
    19.0
}

fn eleven() -> f64 {
    11.0
}

fn fourteen() -> f64 {
    14.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatinParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "multiply")]
    pub blend_mode: String,
    #[serde(default = "black")]
    pub color: RgbColor,
    #[serde(default = "fifty")]
    pub opacity: f64,
    #[serde(default = "satin_angle")]
    pub angle: f64,
    #[serde(default = "eleven")]
    pub distance: f64,
    #[serde(default = "fourteen")]
    pub size: f64,
    #[serde(default)]
    pub invert: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorOverlayParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "normal")]
    pub blend_mode: String,
    #[serde(default = "red")]
    pub color: RgbColor,
    #[serde(default = "hundred")]
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradientOverlayParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "normal")]
    pub blend_mode: String,
    #[serde(default = "hundred")]
    pub opacity: f64,
    #[serde(default = "ninety")]
    pub angle: f64,
    #[serde(default = "hundred")]
    pub scale: f64,
    #[serde(rename = "type", alias = "gradientType", default = "linear")]
    pub gradient_type: String,
    #[serde(default = "black_to_white")]
    pub color_stops: Vec<ColorStop>,
    /// Omit for fully opaque stops at each color stop's location.
    #[serde(default)]
    pub opacity_stops: Option<Vec<OpacityStop>>,
    #[serde(default)]
    pub reverse: bool,
}

// ── Filters ─────────────────────────────────────────────────────

fn blur_radius() -> f64 {
    2.5
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GaussianBlurParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Pixels, 0.1..1000.
    #[serde(default = "blur_radius")]
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotionBlurParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Degrees, -360..360.
    #[serde(default)]
    pub angle: f64,
    /// Pixels, 1..2000.
    #[serde(default = "thirty")]
    pub distance: f64,
}

fn gaussian() -> String {
    "gaussian".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoiseParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Percent, 0.1..400.
    #[serde(default = "five")]
    pub amount: f64,
    /// gaussian or uniform.
    #[serde(default = "gaussian")]
    pub distribution: String,
    #[serde(default = "yes")]
    pub monochromatic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnsharpMaskParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Percent.
    #[serde(default = "hundred")]
    pub amount: f64,
    #[serde(default = "one")]
    pub radius: f64,
    /// Levels, 0..255.
    #[serde(default)]
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HighPassParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "ten")]
    pub radius: f64,
}

fn spin() -> String {
    "spin".to_string()
}

fn good() -> String {
    "good".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RadialBlurParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// 1..100
    #[serde(default = "ten")]
    pub amount: f64,
    /// spin or zoom.
    #[serde(default = "spin")]
    pub method: String,
    /// draft, good or best.
    #[serde(default = "good")]
    pub quality: String,
}

fn fifteen() -> f64 {
    15.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceBlurParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "five")]
    pub radius: f64,
    #[serde(default = "fifteen")]
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LensBlurParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "fifteen")]
    pub radius: f64,
    #[serde(default)]
    pub brightness: f64,
    #[serde(default)]
    pub threshold: f64,
}

fn gaussian_blur() -> String {
    "gaussianBlur".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmartSharpenParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "hundred")]
    pub amount: f64,
    #[serde(default = "one")]
    pub radius: f64,
    #[serde(default)]
    pub noise_reduction: f64,
    /// gaussianBlur, lensBlur or motionBlur.
    #[serde(default = "gaussian_blur")]
    pub remove_type: String,
}

fn emboss_angle() -> f64 {
    135.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbossParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "emboss_angle")]
    pub angle: f64,
    #[serde(default = "three")]
    pub height: f64,
    /// Percent.
    #[serde(default = "hundred")]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PixelateParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "ten")]
    pub cell_size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrystallizeParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "ten")]
    pub cell_size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwirlParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Degrees, -999..999.
    #[serde(default = "fifty")]
    pub angle: f64,
}

fn pond_ripples() -> String {
    "pondRipples".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZigZagParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "ten")]
    pub amount: f64,
    #[serde(default = "five")]
    pub ridges: f64,
    /// aroundCenter, outFromCenter or pondRipples.
    #[serde(default = "pond_ripples")]
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedianParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "one")]
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DustAndScratchesParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "one")]
    pub radius: f64,
    #[serde(default)]
    pub threshold: f64,
}

fn oil_stylization() -> f64 {
    4.0
}

fn half() -> f64 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OilPaintParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// 0.1..10
    #[serde(default = "oil_stylization")]
    pub stylization: f64,
    /// 0..10
    #[serde(default = "five")]
    pub cleanliness: f64,
    /// Brush scale, 0.1..10.
    #[serde(default = "half")]
    pub scale: f64,
    /// 0..10
    #[serde(default = "two")]
    pub bristle_detail: f64,
    #[serde(default = "yes")]
    pub lighting: bool,
    /// Degrees.
    #[serde(default)]
    pub light_direction: f64,
    /// 0..10
    #[serde(default = "half")]
    pub shine: f64,
}

fn eight() -> f64 {
    8.0
}

fn cyan_angle() -> f64 {
    108.0
}

fn magenta_angle() -> f64 {
    162.0
}

fn black_angle() -> f64 {
    45.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorHalftoneParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Pixels, 4..127.
    #[serde(default = "eight")]
    pub max_radius: f64,
    /// Screen angles in degrees, one per channel.
    #[serde(default = "cyan_angle")]
    pub angle1: f64,
    #[serde(default = "magenta_angle")]
    pub angle2: f64,
    #[serde(default = "ninety")]
    pub angle3: f64,
    #[serde(default = "black_angle")]
    pub angle4: f64,
}

// ── Selection ───────────────────────────────────────────────────

fn forty() -> f64 {
    40.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorRangeParams {
    #[serde(default = "red")]
    pub color: RgbColor,
    /// 0..200
    #[serde(default = "forty")]
    pub fuzziness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModifySelectionParams {
    #[serde(default = "one")]
    pub pixels: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatherParams {
    #[serde(default = "five")]
    pub pixels: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmoothSelectionParams {
    #[serde(default = "two")]
    pub sample_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorderSelectionParams {
    #[serde(default = "five")]
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSelectionParams {
    #[serde(default = "alpha_1")]
    pub channel_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChannelNameParams {
    /// An existing channel's name.
    pub channel_name: TargetRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformSelectionParams {
    /// Percent.
    #[serde(default = "hundred")]
    pub width: f64,
    #[serde(default = "hundred")]
    pub height: f64,
    #[serde(default)]
    pub angle: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaParams {
    /// In-focus range tolerance, 0..100.
    #[serde(default)]
    pub fuzziness: f64,
}

// ── Painting ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrushStrokeParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "diagonal")]
    pub points: Vec<Point>,
    #[serde(default = "ten")]
    pub brush_size: f64,
    #[serde(default = "white")]
    pub color: RgbColor,
    #[serde(default = "hundred")]
    pub opacity: f64,
    #[serde(default = "hundred")]
    pub hardness: f64,
    #[serde(default = "hundred")]
    pub flow: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EraserStrokeParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "diagonal")]
    pub points: Vec<Point>,
    #[serde(default = "ten")]
    pub brush_size: f64,
    #[serde(default = "hundred")]
    pub opacity: f64,
    #[serde(default = "hundred")]
    pub hardness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradientDrawParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "origin")]
    pub start_point: Point,
    #[serde(default = "far_corner")]
    pub end_point: Point,
    #[serde(default = "linear")]
    pub gradient_type: String,
    #[serde(default = "hundred")]
    pub opacity: f64,
    #[serde(default = "black_to_white")]
    pub color_stops: Vec<ColorStop>,
}

fn bucket_tolerance() -> f64 {
    32.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaintBucketParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "red")]
    pub color: RgbColor,
    /// 0..255
    #[serde(default = "bucket_tolerance")]
    pub tolerance: f64,
    #[serde(default = "yes")]
    pub contiguous: bool,
    #[serde(default = "hundred")]
    pub opacity: f64,
}

// ── Shapes ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RectangleParams {
    #[serde(default)]
    pub bounds: Bounds,
    #[serde(default = "white")]
    pub fill_color: RgbColor,
    /// A stroke is drawn only with a color and a positive width.
    #[serde(default)]
    pub stroke_color: Option<RgbColor>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default)]
    pub corner_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EllipseParams {
    #[serde(default)]
    pub bounds: Bounds,
    #[serde(default = "white")]
    pub fill_color: RgbColor,
    #[serde(default)]
    pub stroke_color: Option<RgbColor>,
    #[serde(default)]
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineParams {
    #[serde(default = "origin")]
    pub start_point: Point,
    #[serde(default = "far_corner")]
    pub end_point: Point,
    #[serde(default = "white")]
    pub stroke_color: RgbColor,
    #[serde(default = "two")]
    pub stroke_width: f64,
}

fn six() -> u32 {
    6
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolygonParams {
    /// 3..100
    #[serde(default = "six")]
    pub sides: u32,
    #[serde(default = "hundred")]
    pub center_x: f64,
    #[serde(default = "hundred")]
    pub center_y: f64,
    #[serde(default = "fifty")]
    pub radius: f64,
    #[serde(default = "white")]
    pub fill_color: RgbColor,
    #[serde(default)]
    pub stroke_color: Option<RgbColor>,
    #[serde(default)]
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomPathParams {
    /// At least two anchors, each with optional `leftDirection` and
    /// `rightDirection` handles.
    pub points: Vec<PathVertex>,
    #[serde(default = "yes")]
    pub closed: bool,
    #[serde(default = "white")]
    pub fill_color: RgbColor,
    #[serde(default)]
    pub stroke_color: Option<RgbColor>,
    #[serde(default)]
    pub stroke_width: f64,
}

fn twelve() -> f64 {
    12.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArrowParams {
    #[serde(default = "origin")]
    pub start_point: Point,
    /// The arrowhead sits here.
    #[serde(default = "far_corner")]
    pub end_point: Point,
    #[serde(default = "white")]
    pub stroke_color: RgbColor,
    #[serde(default = "two")]
    pub stroke_width: f64,
    /// Arrowhead length in pixels. The head is half as wide.
    #[serde(default = "twelve")]
    pub head_size: f64,
}

// ── Transforms ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreeTransformParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Percent.
    #[serde(default = "hundred")]
    pub width: f64,
    #[serde(default = "hundred")]
    pub height: f64,
    /// Degrees.
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub skew_x: f64,
    #[serde(default)]
    pub skew_y: f64,
    /// Pixels.
    #[serde(default)]
    pub move_x: f64,
    #[serde(default)]
    pub move_y: f64,
}

fn arc() -> String {
    "arc".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarpParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// arc, arcLower, arcUpper, arch, bulge, shellLower, shellUpper, flag,
    /// wave, fish, rise, fisheye, inflate, squeeze, twist.
    #[serde(default = "arc")]
    pub warp_style: String,
    /// -100..100
    #[serde(default = "fifty")]
    pub bend: f64,
    #[serde(default)]
    pub horizontal_distortion: f64,
    #[serde(default)]
    pub vertical_distortion: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentAwareScaleParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "hundred")]
    pub width: f64,
    #[serde(default = "hundred")]
    pub height: f64,
}

fn top_right() -> Point {
    Point::new(100.0, 0.0)
}

fn bottom_left() -> Point {
    Point::new(0.0, 100.0)
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// Corners in percent of the layer bounds.
    #[serde(default = "origin")]
    pub top_left: Point,
    #[serde(default = "top_right")]
    pub top_right: Point,
    #[serde(default = "far_corner")]
    pub bottom_right: Point,
    #[serde(default = "bottom_left")]
    pub bottom_left: Point,
}

// ── Advanced ────────────────────────────────────────────────────

fn thirty_five() -> f64 {
    35.0
}

fn twenty() -> f64 {
    20.0
}

fn clip() -> f64 {
    0.01
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShadowsHighlightsParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "thirty_five")]
    pub shadow_amount: f64,
    #[serde(default = "fifty")]
    pub shadow_tonal_width: f64,
    #[serde(default = "thirty")]
    pub shadow_radius: f64,
    #[serde(default)]
    pub highlight_amount: f64,
    #[serde(default = "fifty")]
    pub highlight_tonal_width: f64,
    #[serde(default = "thirty")]
    pub highlight_radius: f64,
    #[serde(default = "twenty")]
    pub color_correction: f64,
    #[serde(default)]
    pub midtone_contrast: f64,
    #[serde(default = "clip")]
    pub black_clip: f64,
    #[serde(default = "clip")]
    pub white_clip: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LensCorrectionParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default)]
    pub distortion: f64,
    #[serde(default)]
    pub vignette: f64,
    #[serde(default = "fifty")]
    pub vignette_midpoint: f64,
    #[serde(default, rename = "chromaticAberrationRG")]
    pub chromatic_aberration_rg: f64,
    #[serde(default, rename = "chromaticAberrationBY")]
    pub chromatic_aberration_by: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplaceParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "ten")]
    pub horizontal_scale: f64,
    #[serde(default = "ten")]
    pub vertical_scale: f64,
    #[serde(default = "yes")]
    pub stretch_to_fit: bool,
    #[serde(default = "yes")]
    pub wrap_around: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpherizeParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// -100..100
    #[serde(default = "hundred")]
    pub amount: f64,
    /// normal, horizontal or vertical.
    #[serde(default = "normal")]
    pub mode: String,
}

fn five_generators() -> u32 {
    5
}

fn max_wavelength() -> f64 {
    120.0
}

fn sine() -> String {
    "sine".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaveParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    /// 1..999
    #[serde(default = "five_generators")]
    pub generators: u32,
    #[serde(default = "ten")]
    pub wavelength_min: f64,
    #[serde(default = "max_wavelength")]
    pub wavelength_max: f64,
    #[serde(default = "five")]
    pub amplitude_min: f64,
    #[serde(default = "thirty_five")]
    pub amplitude_max: f64,
    /// Percent, both axes.
    #[serde(default = "hundred")]
    pub scale: f64,
    /// sine, triangle or square.
    #[serde(default = "sine")]
    pub wave_type: String,
    /// Same seed, same waves.
    #[serde(default)]
    pub random_seed: u32,
}

fn one_fifty() -> f64 {
    150.0
}

fn sixty_four() -> f64 {
    64.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiquifyParams {
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
    #[serde(default = "hundred")]
    pub start_x: f64,
    #[serde(default = "hundred")]
    pub start_y: f64,
    #[serde(default = "one_fifty")]
    pub end_x: f64,
    #[serde(default = "hundred")]
    pub end_y: f64,
    /// Pixels, 1..15000.
    #[serde(default = "sixty_four")]
    pub brush_size: f64,
    /// 1..100
    #[serde(default = "fifty")]
    pub pressure: f64,
}

// ── Generative ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageParams {
    /// Name given to the generated layer.
    pub layer_name: String,
    pub prompt: String,
    /// photo, art or none.
    #[serde(default = "none")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerativeFillParams {
    pub layer_name: String,
    pub prompt: String,
    /// Layer the fill is generated against.
    pub layer_id: TargetRef,
    #[serde(default = "none")]
    pub content_type: String,
}

// ── Raw ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteBatchPlayParams {
    /// Descriptors in the host's JSON form, each with an `_obj` tag.
    pub commands: Vec<Value>,
    /// Selected before the batch runs.
    #[serde(default)]
    pub layer_id: Option<TargetRef>,
}
