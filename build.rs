//! Compiles the protobuf contracts for the field and user services.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path().map_err(|e| e.to_string())?;
        // SAFETY: build scripts run single-threaded.
        unsafe { std::env::set_var("PROTOC", protoc) };
    }

    tonic_build::configure().compile_protos(
        &[
            "proto/pagination.proto",
            "proto/field.proto",
            "proto/user.proto",
        ],
        &["proto"],
    )?;

    Ok(())
}
