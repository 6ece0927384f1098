/// RGB fill color for a badge background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| anyhow::anyhow!("Color must start with '#': {:?}", value))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Color must be exactly '#RRGGBB': {:?}", value);
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| anyhow::anyhow!("Invalid red component in {:?}: {}", value, e))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| anyhow::anyhow!("Invalid green component in {:?}: {}", value, e))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| anyhow::anyhow!("Invalid blue component in {:?}: {}", value, e))?;
        Ok(Color { r, g, b })
    }
}

impl Color {
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

/// One row of the company registry: display name, output filename and badge color
#[derive(Debug, Clone)]
pub struct CompanyEntry {
    pub display_name: String,
    pub filename: String,
    pub color: String,
}

impl CompanyEntry {
    pub fn new(
        display_name: impl Into<String>,
        filename: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            filename: filename.into(),
            color: color.into(),
        }
    }
}
