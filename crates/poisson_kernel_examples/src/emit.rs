//! Source-code emission of finished kernels as HLSL and C++ array literals.
use poisson_kernel::domain::PointSet;

const HLSL_TYPES: [&str; 3] = ["float", "float2", "float3"];

/// Single-precision literal with an `f` suffix, e.g. `0.25f` or `1e-5f`.
fn float_literal(value: f64) -> String {
    format!("{:?}f", value as f32)
}

/// HLSL `static const` array of `float`/`float2`/`float3`.
pub fn format_hlsl(points: &PointSet) -> String {
    let num_dim = points.num_dim();
    let ty = HLSL_TYPES[num_dim.clamp(1, 3) - 1];

    let mut out = String::from("// hlsl array\n");
    out.push_str(&format!(
        "static const uint SAMPLE_NUM = {};\n",
        points.len()
    ));
    out.push_str(&format!(
        "static const {ty} POISSON_SAMPLES[SAMPLE_NUM] = \n{{ \n"
    ));
    for row in points.rows() {
        let coords: Vec<String> = row.into_iter().map(float_literal).collect();
        if num_dim == 1 {
            out.push_str(&format!("{}, \n", coords[0]));
        } else {
            out.push_str(&format!("{ty}( {} ), \n", coords.join(", ")));
        }
    }
    out.push_str("};\n\n");
    out
}

/// C++ `const float` two-dimensional array, one row per point.
pub fn format_cpp(points: &PointSet) -> String {
    let mut out = String::from("// C++ array\n");
    out.push_str(&format!("const int SAMPLE_NUM = {};\n", points.len()));
    out.push_str(&format!(
        "const float POISSON_SAMPLES[SAMPLE_NUM][{}] = \n{{ \n",
        points.num_dim()
    ));
    for row in points.rows() {
        let coords: Vec<String> = row.into_iter().map(float_literal).collect();
        out.push_str(&format!("{}, \n", coords.join(", ")));
    }
    out.push_str("};\n\n");
    out
}

/// HLSL block followed by the C++ block.
pub fn format_points(points: &PointSet) -> String {
    format_hlsl(points) + &format_cpp(points)
}
