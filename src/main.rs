use clap::Parser;
use iced::Size;
use stillpage::{Args, PdfiumSource, ViewerApp, ViewerConfig};

pub fn main() -> iced::Result {
    env_logger::init();
    let args = Args::parse();
    let config = ViewerConfig::from(&args);

    let path = match args.file {
        Some(path) => path,
        None => match rfd::FileDialog::new()
            .set_title("Open PDF")
            .add_filter("PDF Files", &["pdf"])
            .pick_file()
        {
            Some(path) => path,
            None => {
                log::info!("No file selected, exiting");
                return Ok(());
            }
        },
    };

    let library_dir = args.pdfium_lib;
    let window_size = Size::new(config.initial_window_width, config.initial_window_height);

    iced::application(
        move || {
            ViewerApp::new(
                PdfiumSource::new(library_dir.clone()),
                path.clone(),
                config.clone(),
            )
        },
        ViewerApp::update,
        ViewerApp::view,
    )
    .title(ViewerApp::title)
    .subscription(ViewerApp::subscription)
    .window_size(window_size)
    .run()
}
