pub mod assertions;
pub mod io;
pub mod scene_gen;
pub mod svg_exporter;
