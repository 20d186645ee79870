//! The billboard shader must parse and validate, and its interface must match
//! the CPU-side uniform and instance layouts.

const SPRITE_SHADER: &str = include_str!("../src/gpu/sprite.wgsl");

/// Validates WGSL code using naga.
fn validate_wgsl(code: &str) -> Result<naga::Module, String> {
    let module = naga::front::wgsl::parse_str(code)
        .map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(module)
}

#[test]
fn sprite_shader_validates() {
    if let Err(e) = validate_wgsl(SPRITE_SHADER) {
        panic!("{e}");
    }
}

#[test]
fn sprite_shader_has_both_entry_points() {
    let module = validate_wgsl(SPRITE_SHADER).unwrap();
    let names: Vec<_> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn uniform_block_is_112_bytes() {
    let module = validate_wgsl(SPRITE_SHADER).unwrap();
    let uniforms = module
        .types
        .iter()
        .find(|(_, ty)| ty.name.as_deref() == Some("Uniforms"))
        .map(|(handle, _)| handle)
        .expect("Uniforms struct");

    let mut layouter = naga::proc::Layouter::default();
    layouter.update(module.to_ctx()).unwrap();
    assert_eq!(layouter[uniforms].size, 112);
}

#[test]
fn vertex_inputs_match_instance_layout() {
    let module = validate_wgsl(SPRITE_SHADER).unwrap();
    let vs = module
        .entry_points
        .iter()
        .find(|ep| ep.name == "vs_main")
        .expect("vertex entry point");
    let locations: Vec<u32> = vs
        .function
        .arguments
        .iter()
        .filter_map(|arg| match arg.binding {
            Some(naga::Binding::Location { location, .. }) => Some(location),
            _ => None,
        })
        .collect();
    assert_eq!(locations, vec![0, 1, 2, 3]);
}
