use crate::error::CliError;
use argh::FromArgs;
use bytesize::ByteSize;
use std::path::PathBuf;
use vtf_decode::VtfTexture;

#[derive(FromArgs, Debug)]
/// Print the header of a VTF file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    // Decoding replaces the stored format, so read it from the header alone first.
    let stored = VtfTexture::from_file(&cmd.input, true)?;
    let texture = VtfTexture::from_file(&cmd.input, false)?;

    println!("File:         {}", cmd.input.display());
    println!(
        "Version:      {}.{}",
        texture.version_major(),
        texture.version_minor()
    );
    println!(
        "Dimensions:   {}x{}x{}",
        texture.width(0),
        texture.height(0),
        texture.depth(0)
    );
    println!("Mip levels:   {}", texture.mip_levels());
    println!("Frames:       {}", texture.frames());
    println!("First frame:  {}", texture.first_frame());
    println!("Faces:        {}", texture.face_count());
    println!("Flags:        {:#010X}", texture.flags().bits());
    let settings = texture.sampler_settings();
    println!(
        "Addressing:   {:?} horizontal, {:?} vertical",
        settings.horizontal, settings.vertical
    );
    println!(
        "Format:       {} (decoded as {})",
        stored.format().name,
        texture.format().name
    );
    let [r, g, b] = texture.reflectivity();
    println!("Reflectivity: {r:.3} {g:.3} {b:.3}");
    println!("Bumpmap:      {:.3}", texture.bumpmap_scale());
    println!(
        "Decoded size: {}",
        ByteSize(texture.image_data_size() as u64)
    );

    Ok(())
}
