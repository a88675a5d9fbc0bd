pub mod solve;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::Path;
use std::process;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn exit_with_error(err: &str) -> ! {
    eprintln!("{err}");
    process::exit(1);
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &Path, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{}': '{err}'", path.display()))
}
