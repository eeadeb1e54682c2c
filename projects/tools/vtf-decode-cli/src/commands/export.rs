use crate::error::CliError;
use crate::util::write_ppm;
use argh::FromArgs;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use vtf_decode::VtfTexture;

#[derive(FromArgs, Debug)]
/// Export one plane of a VTF file as a binary PPM image (alpha is dropped)
#[argh(subcommand, name = "export")]
pub struct ExportCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output file path
    #[argh(option)]
    pub output: PathBuf,

    /// mip level to export [default: 0]
    #[argh(option, default = "0")]
    pub mip: u32,

    /// animation frame to export [default: 0]
    #[argh(option, default = "0")]
    pub frame: u32,

    /// cubemap face to export [default: 0]
    #[argh(option, default = "0")]
    pub face: u32,

    /// depth slice to export [default: 0]
    #[argh(option, default = "0")]
    pub slice: u32,
}

pub fn handle_export_command(cmd: ExportCmd) -> Result<(), CliError> {
    let texture = VtfTexture::from_file(&cmd.input, false)?;

    check_index("mip level", cmd.mip, texture.mip_levels())?;
    check_index("frame", cmd.frame, texture.frames())?;
    check_index("face", cmd.face, texture.face_count())?;
    check_index("slice", cmd.slice, texture.depth(cmd.mip))?;

    let mut writer = BufWriter::new(File::create(&cmd.output)?);
    write_ppm(
        &mut writer,
        &texture,
        cmd.mip,
        cmd.frame,
        cmd.face,
        cmd.slice,
    )?;
    writer.flush()?;

    info!(
        "Exported {}x{} plane to {}",
        texture.width(cmd.mip),
        texture.height(cmd.mip),
        cmd.output.display()
    );
    Ok(())
}

fn check_index(plane: &'static str, index: u32, available: u32) -> Result<(), CliError> {
    if index < available {
        Ok(())
    } else {
        Err(CliError::PlaneOutOfRange {
            plane,
            index,
            available,
        })
    }
}
