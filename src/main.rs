use std::env;

use electrode_picker::session::{SessionConfig, ViewerSession};
use electrode_picker::volume_loader::VolumeLoader;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let anatomy_path = args
        .next()
        .expect("usage: electrode-picker <anatomy.nii> <ct.nii>");
    let ct_path = args
        .next()
        .expect("usage: electrode-picker <anatomy.nii> <ct.nii>");

    let anatomy =
        VolumeLoader::load_from_file(&anatomy_path).expect("should have loaded anatomical volume");
    let ct = VolumeLoader::load_from_file(&ct_path).expect("should have loaded CT volume");

    let session = ViewerSession::new(anatomy, ct, SessionConfig::default())
        .expect("volumes should carry usable affines");

    for frame in session.render() {
        let name = format!("{:?}.png", frame.kind).to_lowercase();
        frame
            .image
            .save(&name)
            .expect("should have written view image");
    }
    println!("cursor at {:?}", session.cursor());
}
