pub mod catalog;
pub mod dispatch;
pub mod handlers;
pub mod params;
pub mod validation;

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BridgeError;
use crate::host::Host;

use handlers::{
    adjustments, advanced, document, filters, generative, painting, query, raw, selection, shapes,
    styles, transforms,
};
use params::{
    AlignContentParams, ArrowParams, BevelEmbossParams, BlackAndWhiteParams, BorderSelectionParams,
    BrightnessContrastParams, BrushStrokeParams, ChannelMixerParams, ChannelNameParams,
    ColorBalanceParams, ColorHalftoneParams, ColorOverlayParams, ColorParams, ColorRangeParams,
    ContentAwareScaleParams, CreateDocumentParams, CrystallizeParams, CurvesParams,
    CustomPathParams, DisplaceParams, DropShadowParams, DuplicateDocumentParams,
    DustAndScratchesParams, EllipseParams, EmbossParams, EraserStrokeParams,
    ExecuteBatchPlayParams, ExposureParams, FeatherParams, FocusAreaParams, FreeTransformParams,
    GaussianBlurParams, GenerateImageParams, GenerativeFillParams, GradientDrawParams,
    GradientLayerStyleParams, GradientMapParams, GradientOverlayParams, HelpParams, HighPassParams,
    HueSaturationParams, InnerGlowParams, InnerShadowParams, LayerParams, LensBlurParams,
    LensCorrectionParams, LevelsParams, LineParams, LiquifyParams, MedianParams,
    ModifySelectionParams, MotionBlurParams, NoiseParams, OilPaintParams, OuterGlowParams,
    PaintBucketParams, PerspectiveParams, PhotoFilterParams, PixelateParams, PolygonParams,
    PosterizeParams, RadialBlurParams, RectangleParams, RenameLayerParams, ResizeCanvasParams,
    ResizeImageParams, RotateCanvasParams, SatinParams, SaveSelectionParams, SelectiveColorParams,
    SetActiveDocumentParams, ShadowsHighlightsParams, SmartSharpenParams, SmoothSelectionParams,
    SolidColorFillParams, SpherizeParams, StrokeStyleParams, SurfaceBlurParams, ThresholdParams,
    TransformSelectionParams, TrimDocumentParams, TwirlParams, UnsharpMaskParams, VibranceParams,
    VisibilityParams, WarpParams, WaveParams, ZigZagParams,
};

// ── Tool metadata ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Document,
    Adjustment,
    Style,
    Filter,
    Selection,
    Painting,
    Shape,
    Transform,
    Advanced,
    Generative,
    Raw,
    Query,
}

impl ToolCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Adjustment => "adjustment",
            Self::Style => "style",
            Self::Filter => "filter",
            Self::Selection => "selection",
            Self::Painting => "painting",
            Self::Shape => "shape",
            Self::Transform => "transform",
            Self::Advanced => "advanced",
            Self::Generative => "generative",
            Self::Raw => "raw",
            Self::Query => "query",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Document => "Documents, canvas, layers and colors",
            Self::Adjustment => "Non-destructive adjustment and fill layers",
            Self::Style => "Layer effects: shadows, glows, strokes, overlays",
            Self::Filter => "Blur, sharpen, noise and distortion filters",
            Self::Selection => "Build, modify, save and load selections",
            Self::Painting => "Brush, eraser, gradient and bucket fills",
            Self::Shape => "Vector shape layers",
            Self::Transform => "Scale, rotate, skew, warp, smart objects",
            Self::Advanced => "Content-aware fill, auto corrections, distortions",
            Self::Generative => "AI image generation and background removal",
            Self::Raw => "Submit raw descriptor batches",
            Self::Query => "Inspect documents and layers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.to_lowercase();
        Self::all().iter().copied().find(|c| c.slug() == slug)
    }

    pub fn all() -> &'static [ToolCategory] {
        &[
            Self::Document,
            Self::Adjustment,
            Self::Style,
            Self::Filter,
            Self::Selection,
            Self::Painting,
            Self::Shape,
            Self::Transform,
            Self::Advanced,
            Self::Generative,
            Self::Raw,
            Self::Query,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
}

// ── Tool output ─────────────────────────────────────────────────

/// Successful result of one tool. `message` is for people and models; `data`
/// carries structured results for programs and is `null` for pure mutations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl ToolOutput {
    pub fn unit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Value::Null,
        }
    }

    pub fn data(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

// ── Registry ────────────────────────────────────────────────────

/// Deserializes the tool's options and runs it.
pub type Handler = fn(&mut dyn Host, &Value) -> Result<ToolOutput, BridgeError>;

pub struct ToolEntry {
    pub info: ToolInfo,
    /// JSON schema of the tool's options.
    pub schema: Value,
    pub handler: Handler,
}

/// Name → tool, in catalog order.
pub struct Registry {
    tools: IndexMap<&'static str, ToolEntry>,
}

impl Registry {
    fn build() -> Self {
        let tools = tool_entries()
            .into_iter()
            .map(|entry| (entry.info.name, entry))
            .collect();
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.tools.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.tools.values()
    }

    pub fn in_category(&self, category: ToolCategory) -> impl Iterator<Item = &ToolEntry> {
        self.iter().filter(move |e| e.info.category == category)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// The process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

// ── define_tools! macro ─────────────────────────────────────────

/// Single source of truth for the catalog. Each line yields one
/// [`ToolEntry`] whose handler deserializes the tool's params (or ignores the
/// input for `no_params` tools) and calls the named function.
macro_rules! define_tools {
    (
        params {
            $(
                [ $pc:expr ]
                $pn:literal ( $pp:ty ) => $ph:path : $pd:literal ;
            )*
        }
        no_params {
            $(
                [ $nc:expr ]
                $nn:literal => $nh:path : $nd:literal ;
            )*
        }
    ) => {
        fn tool_entries() -> Vec<ToolEntry> {
            vec![
                $( ToolEntry {
                    info: ToolInfo {
                        name: $pn,
                        description: $pd,
                        category: $pc,
                    },
                    schema: catalog::schema_value::<$pp>(),
                    handler: |host, input| $ph(host, catalog::de::<$pp>(input)?),
                }, )*
                $( ToolEntry {
                    info: ToolInfo {
                        name: $nn,
                        description: $nd,
                        category: $nc,
                    },
                    schema: catalog::empty_object_schema(),
                    handler: |host, _input| $nh(host),
                }, )*
            ]
        }
    };
}

// ── Tool definitions ────────────────────────────────────────────

define_tools! {
    params {
        // ── Document ────────────────────────────────────────────
        [ToolCategory::Document]
        "setActiveDocument" (SetActiveDocumentParams) => document::set_active_document
            : "Make an open document active by id or name.";
        [ToolCategory::Document]
        "duplicateDocument" (DuplicateDocumentParams) => document::duplicate_document
            : "Duplicate the active document under a new name.";
        [ToolCategory::Document]
        "createDocument" (CreateDocumentParams) => document::create_document
            : "Create a document and unlock its background layer.";
        [ToolCategory::Document]
        "resizeImage" (ResizeImageParams) => document::resize_image
            : "Resample the image to a new pixel size and/or resolution.";
        [ToolCategory::Document]
        "resizeCanvas" (ResizeCanvasParams) => document::resize_canvas
            : "Change the canvas size around an anchor, optionally filling the extension.";
        [ToolCategory::Document]
        "rotateCanvas" (RotateCanvasParams) => document::rotate_canvas
            : "Rotate the whole canvas by an angle in degrees.";
        [ToolCategory::Document]
        "trimDocument" (TrimDocumentParams) => document::trim_document
            : "Trim transparent or uniformly colored edges.";
        [ToolCategory::Document]
        "mergeDown" (LayerParams) => document::merge_down
            : "Merge a layer into the layer below it.";
        [ToolCategory::Document]
        "alignContent" (AlignContentParams) => document::align_content
            : "Align a layer to the active selection.";
        [ToolCategory::Document]
        "setForegroundColor" (ColorParams) => document::set_foreground_color
            : "Set the foreground color (default black).";
        [ToolCategory::Document]
        "setBackgroundColor" (ColorParams) => document::set_background_color
            : "Set the background color (default white).";
        [ToolCategory::Document]
        "renameLayer" (RenameLayerParams) => document::rename_layer
            : "Rename a layer.";
        [ToolCategory::Document]
        "deleteLayer" (LayerParams) => document::delete_layer
            : "Delete a layer.";
        [ToolCategory::Document]
        "setLayerVisibility" (VisibilityParams) => document::set_layer_visibility
            : "Show or hide a layer.";

        // ── Adjustment layers ───────────────────────────────────
        [ToolCategory::Adjustment]
        "addAdjustmentLayerBlackAndWhite" (BlackAndWhiteParams) => adjustments::black_and_white
            : "Add a Black & White adjustment layer with per-color mix and optional tint.";
        [ToolCategory::Adjustment]
        "addBrightnessContrastAdjustmentLayer" (BrightnessContrastParams) => adjustments::brightness_contrast
            : "Add a Brightness/Contrast adjustment layer.";
        [ToolCategory::Adjustment]
        "addAdjustmentLayerVibrance" (VibranceParams) => adjustments::vibrance
            : "Add a Vibrance adjustment layer.";
        [ToolCategory::Adjustment]
        "addColorBalanceAdjustmentLayer" (ColorBalanceParams) => adjustments::color_balance
            : "Add a Color Balance adjustment layer with shadow, midtone and highlight levels.";
        [ToolCategory::Adjustment]
        "addCurvesAdjustmentLayer" (CurvesParams) => adjustments::curves
            : "Add a Curves adjustment layer from input/output points on one channel.";
        [ToolCategory::Adjustment]
        "addLevelsAdjustmentLayer" (LevelsParams) => adjustments::levels
            : "Add a Levels adjustment layer.";
        [ToolCategory::Adjustment]
        "addHueSaturationAdjustmentLayer" (HueSaturationParams) => adjustments::hue_saturation
            : "Add a Hue/Saturation adjustment layer.";
        [ToolCategory::Adjustment]
        "addPhotoFilterAdjustmentLayer" (PhotoFilterParams) => adjustments::photo_filter
            : "Add a Photo Filter adjustment layer.";
        [ToolCategory::Adjustment]
        "addChannelMixerAdjustmentLayer" (ChannelMixerParams) => adjustments::channel_mixer
            : "Add a Channel Mixer adjustment layer.";
        [ToolCategory::Adjustment]
        "addGradientMapAdjustmentLayer" (GradientMapParams) => adjustments::gradient_map
            : "Add a Gradient Map adjustment layer.";
        [ToolCategory::Adjustment]
        "addPosterizeAdjustmentLayer" (PosterizeParams) => adjustments::posterize
            : "Add a Posterize adjustment layer.";
        [ToolCategory::Adjustment]
        "addThresholdAdjustmentLayer" (ThresholdParams) => adjustments::threshold
            : "Add a Threshold adjustment layer (level 1-255, default 128).";
        [ToolCategory::Adjustment]
        "addSelectiveColorAdjustmentLayer" (SelectiveColorParams) => adjustments::selective_color
            : "Add a Selective Color adjustment layer for one color range.";
        [ToolCategory::Adjustment]
        "addExposureAdjustmentLayer" (ExposureParams) => adjustments::exposure
            : "Add an Exposure adjustment layer.";
        [ToolCategory::Adjustment]
        "addInvertAdjustmentLayer" (LayerParams) => adjustments::invert
            : "Add an Invert adjustment layer.";
        [ToolCategory::Adjustment]
        "addSolidColorFillLayer" (SolidColorFillParams) => adjustments::solid_color_fill
            : "Add a solid color fill layer.";

        // ── Layer styles ────────────────────────────────────────
        [ToolCategory::Style]
        "createGradientLayerStyle" (GradientLayerStyleParams) => styles::gradient_layer
            : "Create a gradient fill layer from color and opacity stops.";
        [ToolCategory::Style]
        "addStrokeLayerStyle" (StrokeStyleParams) => styles::stroke
            : "Add a stroke effect (INSIDE, CENTER or OUTSIDE).";
        [ToolCategory::Style]
        "addDropShadowLayerStyle" (DropShadowParams) => styles::drop_shadow
            : "Add a drop shadow effect.";
        [ToolCategory::Style]
        "addInnerShadowLayerStyle" (InnerShadowParams) => styles::inner_shadow
            : "Add an inner shadow effect.";
        [ToolCategory::Style]
        "addOuterGlowLayerStyle" (OuterGlowParams) => styles::outer_glow
            : "Add an outer glow effect.";
        [ToolCategory::Style]
        "addInnerGlowLayerStyle" (InnerGlowParams) => styles::inner_glow
            : "Add an inner glow effect from the edge or center.";
        [ToolCategory::Style]
        "addBevelEmbossLayerStyle" (BevelEmbossParams) => styles::bevel_emboss
            : "Add a bevel and emboss effect.";
        [ToolCategory::Style]
        "addSatinLayerStyle" (SatinParams) => styles::satin
            : "Add a satin effect.";
        [ToolCategory::Style]
        "addColorOverlayLayerStyle" (ColorOverlayParams) => styles::color_overlay
            : "Add a color overlay effect.";
        [ToolCategory::Style]
        "addGradientOverlayLayerStyle" (GradientOverlayParams) => styles::gradient_overlay
            : "Add a gradient overlay effect. Stop locations are percents.";
        [ToolCategory::Style]
        "clearLayerStyles" (LayerParams) => styles::clear
            : "Remove every layer effect from a layer.";

        // ── Filters ─────────────────────────────────────────────
        [ToolCategory::Filter]
        "applyGaussianBlur" (GaussianBlurParams) => filters::gaussian_blur
            : "Gaussian blur with a pixel radius.";
        [ToolCategory::Filter]
        "applyMotionBlur" (MotionBlurParams) => filters::motion_blur
            : "Motion blur along an angle.";
        [ToolCategory::Filter]
        "applyNoise" (NoiseParams) => filters::noise
            : "Add gaussian or uniform noise.";
        [ToolCategory::Filter]
        "applySharpen" (LayerParams) => filters::sharpen
            : "Apply the basic sharpen filter.";
        [ToolCategory::Filter]
        "applyUnsharpMask" (UnsharpMaskParams) => filters::unsharp_mask
            : "Unsharp mask with amount, radius and threshold.";
        [ToolCategory::Filter]
        "applyHighPass" (HighPassParams) => filters::high_pass
            : "High pass filter.";
        [ToolCategory::Filter]
        "applyRadialBlur" (RadialBlurParams) => filters::radial_blur
            : "Spin or zoom radial blur.";
        [ToolCategory::Filter]
        "applySurfaceBlur" (SurfaceBlurParams) => filters::surface_blur
            : "Edge-preserving surface blur.";
        [ToolCategory::Filter]
        "applyLensBlur" (LensBlurParams) => filters::lens_blur
            : "Lens blur with noise.";
        [ToolCategory::Filter]
        "applySmartSharpen" (SmartSharpenParams) => filters::smart_sharpen
            : "Smart sharpen removing gaussian, lens or motion blur.";
        [ToolCategory::Filter]
        "applyEmboss" (EmbossParams) => filters::emboss
            : "Emboss filter.";
        [ToolCategory::Filter]
        "applyFindEdges" (LayerParams) => filters::find_edges
            : "Find edges filter.";
        [ToolCategory::Filter]
        "applyPixelate" (PixelateParams) => filters::pixelate
            : "Mosaic pixelation with a cell size.";
        [ToolCategory::Filter]
        "applyCrystallize" (CrystallizeParams) => filters::crystallize
            : "Crystallize filter.";
        [ToolCategory::Filter]
        "applyTwirlDistortion" (TwirlParams) => filters::twirl
            : "Twirl distortion by an angle.";
        [ToolCategory::Filter]
        "applyZigZagDistortion" (ZigZagParams) => filters::zig_zag
            : "Zig-zag distortion.";
        [ToolCategory::Filter]
        "applySolarize" (LayerParams) => filters::solarize
            : "Solarize filter.";
        [ToolCategory::Filter]
        "applyPosterize" (PosterizeParams) => filters::posterize
            : "Destructive posterize.";
        [ToolCategory::Filter]
        "applyDespeckle" (LayerParams) => filters::despeckle
            : "Despeckle filter.";
        [ToolCategory::Filter]
        "applyMedianNoise" (MedianParams) => filters::median
            : "Median noise reduction.";
        [ToolCategory::Filter]
        "applyDustAndScratches" (DustAndScratchesParams) => filters::dust_and_scratches
            : "Dust & scratches noise reduction.";
        [ToolCategory::Filter]
        "applyOilPaint" (OilPaintParams) => filters::oil_paint
            : "Oil paint through the filter gallery.";
        [ToolCategory::Filter]
        "applyColorHalftone" (ColorHalftoneParams) => filters::color_halftone
            : "Color halftone with per-channel screen angles.";

        // ── Selection ───────────────────────────────────────────
        [ToolCategory::Selection]
        "selectColorRange" (ColorRangeParams) => selection::color_range
            : "Select pixels close to a color.";
        [ToolCategory::Selection]
        "selectFocusArea" (FocusAreaParams) => selection::focus_area
            : "Select the in-focus area of the image.";
        [ToolCategory::Selection]
        "expandSelection" (ModifySelectionParams) => selection::expand
            : "Grow the selection outward by pixels.";
        [ToolCategory::Selection]
        "contractSelection" (ModifySelectionParams) => selection::contract
            : "Shrink the selection inward by pixels.";
        [ToolCategory::Selection]
        "featherSelection" (FeatherParams) => selection::feather
            : "Feather the selection edge.";
        [ToolCategory::Selection]
        "smoothSelection" (SmoothSelectionParams) => selection::smooth
            : "Smooth the selection outline.";
        [ToolCategory::Selection]
        "borderSelection" (BorderSelectionParams) => selection::border
            : "Replace the selection with a border band of the given width.";
        [ToolCategory::Selection]
        "saveSelectionAsChannel" (SaveSelectionParams) => selection::save_as_channel
            : "Save the selection as a named alpha channel.";
        [ToolCategory::Selection]
        "loadSelectionFromChannel" (ChannelNameParams) => selection::load_from_channel
            : "Load a selection from a named channel.";
        [ToolCategory::Selection]
        "deleteChannel" (ChannelNameParams) => selection::delete_channel
            : "Delete a named channel.";
        [ToolCategory::Selection]
        "transformSelection" (TransformSelectionParams) => selection::transform
            : "Scale and rotate the selection outline.";

        // ── Painting ────────────────────────────────────────────
        [ToolCategory::Painting]
        "brushStroke" (BrushStrokeParams) => painting::brush_stroke
            : "Paint a brush stroke through points.";
        [ToolCategory::Painting]
        "eraserStroke" (EraserStrokeParams) => painting::eraser_stroke
            : "Erase along points, then return to the brush tool.";
        [ToolCategory::Painting]
        "gradientDraw" (GradientDrawParams) => painting::gradient_draw
            : "Draw a gradient between two points.";
        [ToolCategory::Painting]
        "paintBucketFill" (PaintBucketParams) => painting::paint_bucket
            : "Flood fill from a point with a color.";

        // ── Shapes ──────────────────────────────────────────────
        [ToolCategory::Shape]
        "drawRectangleShape" (RectangleParams) => shapes::rectangle
            : "Draw a rectangle shape layer, optionally rounded and stroked.";
        [ToolCategory::Shape]
        "drawEllipseShape" (EllipseParams) => shapes::ellipse
            : "Draw an ellipse shape layer.";
        [ToolCategory::Shape]
        "drawLineShape" (LineParams) => shapes::line
            : "Draw a stroked line shape layer.";
        [ToolCategory::Shape]
        "drawArrowShape" (ArrowParams) => shapes::arrow
            : "Draw an arrow shape layer with a triangular head.";
        [ToolCategory::Shape]
        "drawPolygonShape" (PolygonParams) => shapes::polygon
            : "Draw a regular polygon shape layer.";
        [ToolCategory::Shape]
        "drawCustomPath" (CustomPathParams) => shapes::custom_path
            : "Draw a shape layer from anchor points with optional bezier handles.";

        // ── Transforms ──────────────────────────────────────────
        [ToolCategory::Transform]
        "freeTransform" (FreeTransformParams) => transforms::free_transform
            : "Scale, rotate, skew and move a layer.";
        [ToolCategory::Transform]
        "warpTransform" (WarpParams) => transforms::warp
            : "Apply a preset warp to a layer.";
        [ToolCategory::Transform]
        "perspectiveTransform" (PerspectiveParams) => transforms::perspective
            : "Map a layer onto the rectangle its four corners describe.";
        [ToolCategory::Transform]
        "contentAwareScale" (ContentAwareScaleParams) => transforms::content_aware_scale
            : "Content-aware scale a layer.";
        [ToolCategory::Transform]
        "convertToSmartObject" (LayerParams) => transforms::convert_to_smart_object
            : "Convert a layer to a smart object.";

        // ── Advanced ────────────────────────────────────────────
        [ToolCategory::Advanced]
        "autoTone" (LayerParams) => advanced::auto_tone
            : "Automatic tonal correction.";
        [ToolCategory::Advanced]
        "autoColor" (LayerParams) => advanced::auto_color
            : "Automatic color correction.";
        [ToolCategory::Advanced]
        "autoContrast" (LayerParams) => advanced::auto_contrast
            : "Automatic contrast correction.";
        [ToolCategory::Advanced]
        "shadowsHighlights" (ShadowsHighlightsParams) => advanced::shadows_highlights
            : "Shadows/Highlights correction.";
        [ToolCategory::Advanced]
        "lensCorrection" (LensCorrectionParams) => advanced::lens_correction
            : "Manual lens distortion, chromatic aberration and vignette correction.";
        [ToolCategory::Advanced]
        "applyDisplace" (DisplaceParams) => advanced::displace
            : "Displace filter.";
        [ToolCategory::Advanced]
        "applySphere" (SpherizeParams) => advanced::spherize
            : "Spherize distortion.";
        [ToolCategory::Advanced]
        "applyWave" (WaveParams) => advanced::wave
            : "Wave distortion with a fixed random seed.";
        [ToolCategory::Advanced]
        "liquifyForward" (LiquifyParams) => advanced::liquify_forward
            : "Open liquify on a layer; the forward-warp stroke is reported, not applied.";

        // ── Generative ──────────────────────────────────────────
        [ToolCategory::Generative]
        "generateImage" (GenerateImageParams) => generative::generate_image
            : "Generate an image layer from a prompt and name it.";
        [ToolCategory::Generative]
        "generativeFill" (GenerativeFillParams) => generative::generative_fill
            : "Fill the selection from a prompt and name the result.";
        [ToolCategory::Generative]
        "removeBackground" (LayerParams) => generative::remove_background
            : "Remove the background of a layer.";

        // ── Raw ─────────────────────────────────────────────────
        [ToolCategory::Raw]
        "executeBatchPlayCommand" (ExecuteBatchPlayParams) => raw::execute_batch_play
            : "Submit raw descriptors, optionally selecting a layer first. Returns the host results.";

        // ── Query ───────────────────────────────────────────────
        [ToolCategory::Query]
        "help" (HelpParams) => query::help
            : "List categories, the tools in a category, or one tool's parameters.";
    }
    no_params {
        [ToolCategory::Document]
        "saveDocument" => document::save_document
            : "Save the active document.";
        [ToolCategory::Document]
        "cropDocument" => document::crop_document
            : "Crop the document to the active selection.";
        [ToolCategory::Document]
        "revealAll" => document::reveal_all
            : "Grow the canvas to show all layer content.";
        [ToolCategory::Document]
        "mergeVisible" => document::merge_visible
            : "Merge all visible layers.";
        [ToolCategory::Document]
        "stampVisible" => document::stamp_visible
            : "Merge visible layers into a new layer, keeping the originals.";
        [ToolCategory::Document]
        "swapColors" => document::swap_colors
            : "Swap foreground and background colors.";

        [ToolCategory::Selection]
        "selectAll" => selection::select_all
            : "Select the whole canvas.";
        [ToolCategory::Selection]
        "growSelection" => selection::grow
            : "Grow the selection to adjacent similar pixels.";
        [ToolCategory::Selection]
        "similarSelection" => selection::similar
            : "Extend the selection to similar pixels anywhere.";

        [ToolCategory::Advanced]
        "contentAwareFill" => advanced::content_aware_fill
            : "Fill the selection from surrounding content.";

        [ToolCategory::Query]
        "getDocuments" => query::get_documents
            : "List open documents.";
        [ToolCategory::Query]
        "getDocumentInfo" => query::get_document_info
            : "Size, mode, resolution and save state of the active document.";
        [ToolCategory::Query]
        "getLayers" => query::get_layers
            : "The active document's layer tree.";
        [ToolCategory::Query]
        "listTools" => query::list_tools
            : "Every tool name with its category.";
    }
}
