use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// --- Section tables ---

/// Section entries keyed by their original ini key, in file order.
pub type BufferTable = IndexMap<String, BufferRecord>;
pub type SelectorTable = IndexMap<String, SelectorRecord>;
pub type TagTable = IndexMap<String, TagRecord>;

/// The three sections of one controller file that take part in the join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ControllerConfig {
    pub buffers: BufferTable,
    pub selectors: SelectorTable,
    pub tags: TagTable,
}

// --- NetBios ---

/// One communication buffer from the `NetBios` section.
///
/// `Name = Type(R/W), [LinkFlag], [LinkMask], Descr, Period(s), Func, [Param1, Param2, ...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BufferRecord {
    pub key: String,
    pub direction: String,
    pub link_flag: String,
    pub link_mask: String,
    pub description: String,
    pub period: String,
    pub function: String,
    /// Remaining parameters, comma-joined as they appeared in the file.
    pub params: String,
}

impl BufferRecord {
    /// Build a record from positional values. Missing values stay empty.
    pub fn from_fields(key: &str, fields: [String; 7]) -> Self {
        let [
            direction,
            link_flag,
            link_mask,
            description,
            period,
            function,
            params,
        ] = fields;
        Self {
            key: key.to_string(),
            direction,
            link_flag,
            link_mask,
            description,
            period,
            function,
            params,
        }
    }
}

// --- Selectors ---

/// One selector from the `Selectors` section: `key=(Mask1, Value1), (Mask2, Value2)`.
///
/// The mask/value list is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectorRecord {
    pub key: String,
    pub mask_value: String,
}

// --- Tags ---

/// One point definition from the `Tags` section.
///
/// `key=(TagName),[Parent],(Type),Description,InBuffer,InBufferOffset,[k,b],[Selector/BoolMask/NullZone],
/// [OutBuffer, OutBufferOffset],[Default],[DefaultMin],[DefaultMax],[Hysteresis],[InType],[OutType],[LinkFlag],[LinkMask]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TagRecord {
    pub key: String,
    pub tag_name: String,
    pub tag_parent: String,
    pub data_type: String,
    pub description: String,
    pub in_buf: String,
    pub in_buf_off: String,
    /// Scaling slope
    pub k: String,
    /// Scaling intercept
    pub b: String,
    pub selector: String,
    pub out_buf: String,
    pub out_buf_off: String,
    pub default: String,
    pub default_min: String,
    pub default_max: String,
    pub hysteresis: String,
    pub in_type: String,
    pub out_type: String,
    pub link_flag: String,
    pub link_mask: String,
}

impl TagRecord {
    /// Build a record from the 19 positional values of a `Tags` entry.
    pub fn from_fields(key: &str, fields: [String; 19]) -> Self {
        let [
            tag_name,
            tag_parent,
            data_type,
            description,
            in_buf,
            in_buf_off,
            k,
            b,
            selector,
            out_buf,
            out_buf_off,
            default,
            default_min,
            default_max,
            hysteresis,
            in_type,
            out_type,
            link_flag,
            link_mask,
        ] = fields;
        Self {
            key: key.to_string(),
            tag_name,
            tag_parent,
            data_type,
            description,
            in_buf,
            in_buf_off,
            k,
            b,
            selector,
            out_buf,
            out_buf_off,
            default,
            default_min,
            default_max,
            hysteresis,
            in_type,
            out_type,
            link_flag,
            link_mask,
        }
    }

    /// `parent.name`, the name engineers search for in the output table.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.tag_parent, self.tag_name)
    }
}

// --- Output ---

/// Which side of a tag produced an output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Side {
    #[default]
    Read,
    Write,
}

/// One line of the converted table.
///
/// Field order is the column order of the CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputRow {
    pub tag_full_name: String,
    pub description: String,
    pub data_type: String,
    pub direction: String,
    pub ab_type: String,
    pub ab_addr: String,
    pub ab_off: String,
    pub selector: String,
    pub other: String,
    #[serde(skip)]
    pub side: Side,
}

impl OutputRow {
    /// CSV header, matching the serialized field order.
    pub const COLUMNS: [&'static str; 9] = [
        "tag_full_name",
        "description",
        "data_type",
        "direction",
        "ab_type",
        "ab_addr",
        "ab_off",
        "selector",
        "other",
    ];
}
