use crate::rendering::canvas::Canvas;
use crate::rendering::color::{convert_channel, Color};
use std::io;
use std::path::Path;

const ROW_MAX_LEN: usize = 70;

/// Plain-text PPM (P3) image.
pub struct Ppm {
    data: String,
}

impl Ppm {
    pub fn new(canvas: &Canvas) -> Ppm {
        let mut builder = PpmBuilder::new();
        builder.write_header(canvas.width(), canvas.height());

        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                builder.write_color(&canvas.pixel(x, y));
            }
            builder.write_new_row();
        }

        Ppm {
            data: builder.data,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Writes the image to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        std::fs::write(path, &self.data)
    }
}

struct PpmBuilder {
    data: String,
    row_len: usize,
}

impl PpmBuilder {
    fn new() -> PpmBuilder {
        PpmBuilder {
            data: String::new(),
            row_len: 0,
        }
    }

    fn write_header(&mut self, width: usize, height: usize) {
        self.data.push_str(&format!("P3\n{} {}\n255\n", width, height));
    }

    fn write_new_row(&mut self) {
        self.data.push('\n');
        self.row_len = 0;
    }

    fn write_color(&mut self, c: &Color) {
        self.write_channel(c.r);
        self.write_channel(c.g);
        self.write_channel(c.b);
    }

    // Keeps emitted lines at most ROW_MAX_LEN characters; some PPM readers
    // reject longer lines.
    fn write_channel(&mut self, c: f64) {
        let value = convert_channel(c).to_string();

        if self.row_len + value.len() + 1 > ROW_MAX_LEN {
            self.write_new_row();
        }

        if self.row_len > 0 {
            self.data.push(' ');
            self.row_len += 1;
        }

        self.row_len += value.len();
        self.data.push_str(&value);
    }
}
