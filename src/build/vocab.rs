//! Caller vocabulary → host enumeration values.
//!
//! Lookups ignore case, spaces, `-` and `_`, so `"Color Dodge"`,
//! `"COLOR_DODGE"` and `"colordodge"` all land on `colorDodge`. A miss falls
//! back to the table default and logs a warning; it never fails the command.

use tracing::warn;

use crate::descriptor::EnumNode;

/// A closed vocabulary with its host enum tag and fallback.
#[derive(Debug)]
pub struct EnumTable {
    /// Human name used in warnings.
    pub name: &'static str,
    /// `_enum` tag on the wire. Empty for vocabularies sent as plain strings.
    pub enum_tag: &'static str,
    /// Normalized caller key → host value.
    pub entries: &'static [(&'static str, &'static str)],
    pub default: &'static str,
}

impl EnumTable {
    /// Host value for `input`, or the default.
    pub fn lookup(&self, input: &str) -> &'static str {
        let key = normalize(input);
        match self.entries.iter().find(|(k, _)| *k == key) {
            Some((_, wire)) => wire,
            None => {
                warn!(
                    table = self.name,
                    input,
                    fallback = self.default,
                    "unrecognized value, using default"
                );
                self.default
            }
        }
    }

    pub fn node(&self, input: &str) -> EnumNode {
        EnumNode::new(self.enum_tag, self.lookup(input))
    }

    /// Caller-facing keys, for help text and schemas.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }
}

fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

pub static BLEND_MODE: EnumTable = EnumTable {
    name: "blend mode",
    enum_tag: "blendMode",
    entries: &[
        ("normal", "normal"),
        ("dissolve", "dissolve"),
        ("darken", "darken"),
        ("multiply", "multiply"),
        ("colorburn", "colorBurn"),
        ("linearburn", "linearBurn"),
        ("darkercolor", "darkerColor"),
        ("lighten", "lighten"),
        ("screen", "screen"),
        ("colordodge", "colorDodge"),
        ("lineardodge", "linearDodge"),
        ("lightercolor", "lighterColor"),
        ("overlay", "overlay"),
        ("softlight", "softLight"),
        ("hardlight", "hardLight"),
        ("vividlight", "vividLight"),
        ("linearlight", "linearLight"),
        ("pinlight", "pinLight"),
        ("hardmix", "hardMix"),
        ("difference", "difference"),
        ("exclusion", "exclusion"),
        ("subtract", "blendSubtraction"),
        ("divide", "blendDivide"),
        ("hue", "hue"),
        ("saturation", "saturation"),
        ("color", "color"),
        ("luminosity", "luminosity"),
        ("passthrough", "passThrough"),
    ],
    default: "normal",
};

pub static STROKE_POSITION: EnumTable = EnumTable {
    name: "stroke position",
    enum_tag: "frameStyle",
    entries: &[
        ("center", "centeredFrame"),
        ("inside", "insetFrame"),
        ("outside", "outsetFrame"),
    ],
    default: "centeredFrame",
};

pub static GRADIENT_TYPE: EnumTable = EnumTable {
    name: "gradient type",
    enum_tag: "gradientType",
    entries: &[
        ("linear", "linear"),
        ("radial", "radial"),
        ("angle", "angle"),
        ("reflected", "reflected"),
        ("diamond", "diamond"),
    ],
    default: "linear",
};

pub static GLOW_SOURCE: EnumTable = EnumTable {
    name: "inner glow source",
    enum_tag: "innerGlowSourceType",
    entries: &[("center", "centerGlow"), ("edge", "edgeGlow")],
    default: "edgeGlow",
};

pub static BEVEL_DIRECTION: EnumTable = EnumTable {
    name: "bevel direction",
    enum_tag: "bevelEmbossStampStyle",
    entries: &[("up", "stampIn"), ("down", "stampOut")],
    default: "stampIn",
};

pub static BEVEL_STYLE: EnumTable = EnumTable {
    name: "bevel style",
    enum_tag: "bevelEmbossStyle",
    entries: &[
        ("outerbevel", "outerBevel"),
        ("innerbevel", "innerBevel"),
        ("emboss", "emboss"),
        ("pillowemboss", "pillowEmboss"),
        ("strokeemboss", "strokeEmboss"),
    ],
    default: "innerBevel",
};

pub static BEVEL_TECHNIQUE: EnumTable = EnumTable {
    name: "bevel technique",
    enum_tag: "bevelTechnique",
    entries: &[
        ("smooth", "softMatte"),
        ("chiselhard", "preciseMatte"),
        ("chiselsoft", "slopeLimitMatte"),
    ],
    default: "softMatte",
};

/// Sent as a plain string, not an enum node.
pub static CONTENT_TYPE: EnumTable = EnumTable {
    name: "content type",
    enum_tag: "",
    entries: &[("photo", "photo"), ("art", "art"), ("none", "none")],
    default: "none",
};

pub static ALIGNMENT: EnumTable = EnumTable {
    name: "alignment",
    enum_tag: "alignDistributeSelector",
    entries: &[
        ("left", "ADSLefts"),
        ("centerhorizontal", "ADSCentersH"),
        ("right", "ADSRights"),
        ("top", "ADSTops"),
        ("centervertical", "ADSCentersV"),
        ("bottom", "ADSBottoms"),
    ],
    default: "ADSLefts",
};

pub static TRIM_BASIS: EnumTable = EnumTable {
    name: "trim basis",
    enum_tag: "trimBasedOn",
    entries: &[
        ("transparent", "transparency"),
        ("transparency", "transparency"),
        ("topleft", "topLeftPixelColor"),
        ("topleftpixelcolor", "topLeftPixelColor"),
        ("bottomright", "bottomRightPixelColor"),
        ("bottomrightpixelcolor", "bottomRightPixelColor"),
    ],
    default: "transparency",
};

pub static INTERPOLATION: EnumTable = EnumTable {
    name: "interpolation",
    enum_tag: "interpolationType",
    entries: &[
        ("automatic", "bicubicAutomatic"),
        ("bicubicautomatic", "bicubicAutomatic"),
        ("nearestneighbor", "nearestNeighbor"),
        ("bilinear", "bilinear"),
        ("bicubic", "bicubic"),
        ("bicubicsmoother", "bicubicSmoother"),
        ("bicubicsharper", "bicubicSharper"),
        ("preservedetails", "preserveDetailsUpscale"),
    ],
    default: "bicubicAutomatic",
};

pub static SPHERIZE_MODE: EnumTable = EnumTable {
    name: "spherize mode",
    enum_tag: "spherizeMode",
    entries: &[
        ("normal", "normal"),
        ("horizontal", "horizontalOnly"),
        ("vertical", "verticalOnly"),
    ],
    default: "normal",
};

pub static WAVE_TYPE: EnumTable = EnumTable {
    name: "wave type",
    enum_tag: "waveType",
    entries: &[
        ("sine", "sinusoidal"),
        ("triangle", "triangular"),
        ("square", "squareWave"),
    ],
    default: "sinusoidal",
};

pub static RADIAL_BLUR_METHOD: EnumTable = EnumTable {
    name: "radial blur method",
    enum_tag: "blurMethod",
    entries: &[("spin", "spin"), ("zoom", "zoom")],
    default: "spin",
};

pub static RADIAL_BLUR_QUALITY: EnumTable = EnumTable {
    name: "radial blur quality",
    enum_tag: "blurQuality",
    entries: &[("draft", "draft"), ("good", "good"), ("best", "best")],
    default: "good",
};

pub static NOISE_DISTRIBUTION: EnumTable = EnumTable {
    name: "noise distribution",
    enum_tag: "distribution",
    entries: &[
        ("gaussian", "gaussianDistribution"),
        ("uniform", "uniformDistribution"),
    ],
    default: "gaussianDistribution",
};

pub static ZIGZAG_STYLE: EnumTable = EnumTable {
    name: "zig-zag style",
    enum_tag: "zigZagType",
    entries: &[
        ("aroundcenter", "aroundCenter"),
        ("outfromcenter", "outFromCenter"),
        ("pondripples", "pondRipples"),
    ],
    default: "pondRipples",
};

pub static WARP_STYLE: EnumTable = EnumTable {
    name: "warp style",
    enum_tag: "warpStyle",
    entries: &[
        ("arc", "warpArc"),
        ("arclower", "warpArcLower"),
        ("arcupper", "warpArcUpper"),
        ("arch", "warpArch"),
        ("bulge", "warpBulge"),
        ("shelllower", "warpShellLower"),
        ("shellupper", "warpShellUpper"),
        ("flag", "warpFlag"),
        ("wave", "warpWave"),
        ("fish", "warpFish"),
        ("rise", "warpRise"),
        ("fisheye", "warpFisheye"),
        ("inflate", "warpInflate"),
        ("squeeze", "warpSqueeze"),
        ("twist", "warpTwist"),
    ],
    default: "warpArc",
};

/// Curves, levels and channel mixer output channel.
pub static CHANNEL: EnumTable = EnumTable {
    name: "channel",
    enum_tag: "channel",
    entries: &[
        ("composite", "composite"),
        ("rgb", "composite"),
        ("red", "red"),
        ("green", "grain"),
        ("blue", "blue"),
    ],
    default: "composite",
};

pub static SELECTIVE_COLOR_RANGE: EnumTable = EnumTable {
    name: "selective color range",
    enum_tag: "colors",
    entries: &[
        ("reds", "reds"),
        ("yellows", "yellows"),
        ("greens", "greens"),
        ("cyans", "cyans"),
        ("blues", "blues"),
        ("magentas", "magentas"),
        ("whites", "whites"),
        ("neutrals", "neutrals"),
        ("blacks", "blacks"),
    ],
    default: "reds",
};

pub static SHARPEN_REMOVE: EnumTable = EnumTable {
    name: "smart sharpen removal",
    enum_tag: "removeType",
    entries: &[
        ("gaussianblur", "gaussianBlur"),
        ("gaussian", "gaussianBlur"),
        ("lensblur", "lensBlur"),
        ("lens", "lensBlur"),
        ("motionblur", "motionBlur"),
        ("motion", "motionBlur"),
    ],
    default: "gaussianBlur",
};

/// New-document color mode, sent as a `_class` node.
pub static DOCUMENT_MODE: EnumTable = EnumTable {
    name: "document color mode",
    enum_tag: "",
    entries: &[
        ("rgb", "RGBColorMode"),
        ("cmyk", "CMYKColorMode"),
        ("grayscale", "grayscaleMode"),
        ("gray", "grayscaleMode"),
        ("lab", "labColorMode"),
        ("bitmap", "bitmapMode"),
    ],
    default: "RGBColorMode",
};

/// Canvas anchor such as `TOPLEFT` or `MIDDLECENTER`, split into the
/// `horizontalLocation` and `verticalLocation` values.
pub fn anchor(input: &str) -> (EnumNode, EnumNode) {
    let key = input.to_uppercase();
    let horizontal = if key.contains("LEFT") {
        "left"
    } else if key.contains("RIGHT") {
        "right"
    } else {
        "center"
    };
    let vertical = if key.contains("TOP") {
        "top"
    } else if key.contains("BOTTOM") {
        "bottom"
    } else {
        "center"
    };
    (
        EnumNode::new("horizontalLocation", horizontal),
        EnumNode::new("verticalLocation", vertical),
    )
}
