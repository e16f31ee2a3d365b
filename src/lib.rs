#![doc = r#"
emblem-resize: scale emblem icons to a standard height.

For every configured emblem name the crate reads `{base_dir}/{name}_fullres.png`,
resizes it with a Lanczos3 filter to the target height (64 px by default) while
keeping the aspect ratio, and writes an optimized PNG to `{base_dir}/{name}.png`.
Missing sources are reported and skipped; any other failure stops the run.

The output width is `floor(target_height * width / height)`: a 1000x500 source
becomes 128x64, and so does a 1001x500 source.

Quick start
-----------
```rust,no_run
use std::path::PathBuf;
use emblem_resize::{process_emblems, EmblemName, ResizeConfig};

fn main() -> emblem_resize::Result<()> {
    let config = ResizeConfig {
        base_dir: PathBuf::from("public"),
        names: vec![EmblemName::new("gold")?, EmblemName::new("legend")?],
        target_height: 64,
    };

    let report = process_emblems(&config, |outcome| println!("{outcome}"))?;
    println!("created={} missing={}", report.created(), report.missing());
    Ok(())
}
```

Error handling
--------------
All public functions return `emblem_resize::Result<T>`; match on `emblem_resize::Error`
to handle specific cases.

```rust,no_run
use std::path::Path;
use emblem_resize::{process_emblem, EmblemName, Error};

fn main() {
    let name = EmblemName::new("bronze").unwrap();
    match process_emblem(Path::new("public"), &name, 64) {
        Ok(outcome) => println!("{outcome}"),
        Err(Error::Image(e)) => eprintln!("Bad image: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — batch and single-emblem entry points.
- [`core`] — configuration and resize primitives.
- [`io`] — image decoding and PNG encoding.
- [`types`] — `EmblemName` and `Dimensions`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::ResizeConfig;
pub use core::processing::resize::{
    calculate_target_dimensions, resize_to_dimensions, resize_to_height,
};
pub use error::{Error, Result};
pub use types::{DEFAULT_EMBLEMS, Dimensions, EmblemName};

pub use io::{read_image, write_png};

pub use api::{BatchReport, EmblemOutcome, process_emblem, process_emblems};
