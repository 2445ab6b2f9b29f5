fn main() -> anyhow::Result<()> {
    drivestream::app_core::DriveStream::new()?.run()?;
    Ok(())
}
