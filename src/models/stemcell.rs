use serde::{Deserialize, Serialize};

use crate::schema::{CloudProperties, FieldKind, FieldSpec, ResourceKind};
use crate::validate::Validatable;

pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("name", "name", FieldKind::String, "Stemcell name"),
    FieldSpec::new("version", "version", FieldKind::String, "Stemcell version"),
    FieldSpec::new("infrastructure", "infrastructure", FieldKind::String, "Infrastructure the stemcell targets"),
    FieldSpec::new("source_url", "source_url", FieldKind::String, "Storage URL of a raw image tarball to import"),
    FieldSpec::new("image_url", "image_url", FieldKind::String, "Self link of an existing image to reuse"),
];

/// Identifies the boot image a stemcell resolves to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemcellCloudProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub infrastructure: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_url: String,
    /// URL of an existing image (its self link)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

/// Where the image for a stemcell comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemcellSource<'a> {
    /// Reuse an image that already exists
    ExistingImage(&'a str),
    /// Import a raw image from storage
    SourceUrl(&'a str),
    /// Upload the image shipped inside the stemcell tarball
    Tarball,
}

impl StemcellCloudProperties {
    /// Classify the image source.
    ///
    /// Both URLs being set is not an error; the existing image wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpi_props::models::{StemcellCloudProperties, StemcellSource};
    ///
    /// let props = StemcellCloudProperties {
    ///     source_url: "https://storage.googleapis.com/b/image.tgz".into(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(props.source(), StemcellSource::SourceUrl("https://storage.googleapis.com/b/image.tgz"));
    /// assert_eq!(StemcellCloudProperties::default().source(), StemcellSource::Tarball);
    /// ```
    pub fn source(&self) -> StemcellSource<'_> {
        if !self.image_url.is_empty() {
            StemcellSource::ExistingImage(&self.image_url)
        } else if !self.source_url.is_empty() {
            StemcellSource::SourceUrl(&self.source_url)
        } else {
            StemcellSource::Tarball
        }
    }
}

impl CloudProperties for StemcellCloudProperties {
    const KIND: ResourceKind = ResourceKind::Stemcell;
}

impl Validatable for StemcellCloudProperties {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_wins_over_source_url() {
        let props = StemcellCloudProperties {
            source_url: "gs://bucket/image.tgz".into(),
            image_url: "projects/p/global/images/stemcell".into(),
            ..Default::default()
        };
        assert_eq!(props.source(), StemcellSource::ExistingImage("projects/p/global/images/stemcell"));
        assert!(props.validate().is_ok());
    }
}
