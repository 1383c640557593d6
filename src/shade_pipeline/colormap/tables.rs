//! Control-point tables for the built-in palettes.
//!
//! Each table is an ordered list of RGB triples with components in [0, 1],
//! evenly spaced across the normalized domain. The shading engine
//! interpolates linearly between adjacent points; the tables themselves
//! carry no interpolation logic.

/// One RGB control point, components in [0, 1].
pub type ControlPoint = [f32; 3];

pub const GRAYSCALE: &[ControlPoint] = &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

/// Google's Turbo colormap, subsampled at 16 evenly spaced entries from the
/// published 256-entry table.
pub const TURBO: &[ControlPoint] = &[
    [0.18995, 0.07176, 0.23217],
    [0.25369, 0.26327, 0.65406],
    [0.27691, 0.44145, 0.91328],
    [0.24427, 0.60937, 0.99697],
    [0.13278, 0.77165, 0.88580],
    [0.10342, 0.89600, 0.71500],
    [0.27597, 0.97092, 0.51653],
    [0.53255, 0.99919, 0.30581],
    [0.72596, 0.96470, 0.20640],
    [0.88331, 0.86553, 0.21719],
    [0.98000, 0.73000, 0.22161],
    [0.99297, 0.55214, 0.15417],
    [0.94084, 0.35566, 0.07031],
    [0.83926, 0.20654, 0.02305],
    [0.68602, 0.09536, 0.00481],
    [0.47960, 0.01583, 0.01055],
];

pub const VIRIDIS: &[ControlPoint] = &[
    [0.26667, 0.00392, 0.32941],
    [0.28235, 0.12941, 0.45098],
    [0.25098, 0.26275, 0.52941],
    [0.20392, 0.36863, 0.55294],
    [0.16078, 0.47059, 0.55686],
    [0.12549, 0.56471, 0.54902],
    [0.13333, 0.65490, 0.51765],
    [0.26667, 0.74510, 0.43922],
    [0.47451, 0.81961, 0.31765],
    [0.74118, 0.87059, 0.14902],
    [0.99216, 0.90588, 0.14118],
];

pub const CIVIDIS: &[ControlPoint] = &[
    [0.00000, 0.12549, 0.29804],
    [0.00000, 0.16471, 0.40000],
    [0.00000, 0.20392, 0.43137],
    [0.09804, 0.24706, 0.45098],
    [0.18039, 0.28627, 0.44706],
    [0.26275, 0.32941, 0.41961],
    [0.35294, 0.37647, 0.38431],
    [0.45098, 0.41569, 0.33333],
    [0.56078, 0.45882, 0.27451],
    [0.67451, 0.50588, 0.21176],
    [0.80784, 0.55686, 0.14118],
    [0.92941, 0.61961, 0.06275],
    [1.00000, 0.67451, 0.00000],
];

/// Black body radiation: black through red and yellow to white.
pub const HOT: &[ControlPoint] = &[
    [0.00000, 0.00000, 0.00000],
    [0.34239, 0.00000, 0.00000],
    [0.68478, 0.00000, 0.00000],
    [1.00000, 0.02604, 0.00000],
    [1.00000, 0.35417, 0.00000],
    [1.00000, 0.68229, 0.00000],
    [1.00000, 1.00000, 0.01562],
    [1.00000, 1.00000, 0.50781],
    [1.00000, 1.00000, 1.00000],
];

pub const COOL: &[ControlPoint] = &[[0.0, 1.0, 1.0], [1.0, 0.0, 1.0]];

/// Full hue wheel from red back to red at constant saturation and value.
pub const HSV: &[ControlPoint] = &[
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
];

/// Elevation shading: deep blue through green and khaki to white peaks.
pub const TERRAIN: &[ControlPoint] = &[
    [0.20000, 0.20000, 0.60000],
    [0.03333, 0.53333, 0.93333],
    [0.00000, 0.80000, 0.40000],
    [0.50000, 0.90000, 0.50000],
    [1.00000, 1.00000, 0.60000],
    [0.75000, 0.68000, 0.46500],
    [0.50000, 0.36000, 0.33000],
    [0.75000, 0.68000, 0.66500],
    [1.00000, 1.00000, 1.00000],
];

/// Topographic shading: ocean blue through vegetation green to light tan.
pub const GIST_EARTH: &[ControlPoint] = &[
    [0.00000, 0.00000, 0.00000],
    [0.04314, 0.18039, 0.45098],
    [0.11373, 0.35294, 0.42745],
    [0.18824, 0.47059, 0.30980],
    [0.34118, 0.55686, 0.27843],
    [0.56471, 0.62353, 0.29804],
    [0.69804, 0.60000, 0.37647],
    [0.77647, 0.63137, 0.53333],
    [0.99216, 0.98431, 0.98431],
];

/// The classic gnuplot trace: r = sqrt(t), g = t^3, b = max(0, sin(2*pi*t)).
pub const GNUPLOT: &[ControlPoint] = &[
    [0.00000, 0.00000, 0.00000],
    [0.35355, 0.00195, 0.70711],
    [0.50000, 0.01562, 1.00000],
    [0.61237, 0.05273, 0.70711],
    [0.70711, 0.12500, 0.00000],
    [0.79057, 0.24414, 0.00000],
    [0.86603, 0.42188, 0.00000],
    [0.93541, 0.66992, 0.00000],
    [1.00000, 1.00000, 0.00000],
];

pub const RAINBOW: &[ControlPoint] = &[
    [0.50000, 0.00000, 1.00000],
    [0.25000, 0.38268, 0.98079],
    [0.00000, 0.70711, 0.92388],
    [0.25000, 0.92388, 0.83147],
    [0.50000, 1.00000, 0.70711],
    [0.75000, 0.92388, 0.55557],
    [1.00000, 0.70711, 0.38268],
    [1.00000, 0.38268, 0.19509],
    [1.00000, 0.00000, 0.00000],
];
