use crate::{CatalogError, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use wisata_core::{Corpus, Item, ItemAttributes};

/// Name given to rows whose identifier cell is blank
pub const UNNAMED_ITEM: &str = "Unnamed";

/// Header names for each catalog field
#[derive(Debug, Clone)]
pub struct CatalogColumns {
    pub name: String,
    pub text: String,
    pub image_url: String,
    pub category: String,
    pub opening_hours: String,
    pub ticket_price: String,
    pub maps_url: String,
    pub description: String,
    pub facilities: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            name: "nama_wisata".to_string(),
            text: "deskripsi_kombinasi_clean".to_string(),
            image_url: "url_gambar".to_string(),
            category: "kategori".to_string(),
            opening_hours: "jam_operasional".to_string(),
            ticket_price: "harga_tiket".to_string(),
            maps_url: "url_gmaps".to_string(),
            description: "deskripsi".to_string(),
            facilities: "fasilitas".to_string(),
        }
    }
}

// Resolved header positions; `None` for columns the file doesn't have
struct ColumnIndex {
    name: usize,
    text: Option<usize>,
    image_url: Option<usize>,
    category: Option<usize>,
    opening_hours: Option<usize>,
    ticket_price: Option<usize>,
    maps_url: Option<usize>,
    description: Option<usize>,
    facilities: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &CatalogColumns) -> Result<Self> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);

        let name = find(columns.name.as_str()).ok_or_else(|| CatalogError::MissingColumn(columns.name.clone()))?;
        let text = find(columns.text.as_str());
        if text.is_none() {
            warn!(column = %columns.text, "text column missing, every item gets empty text");
        }

        Ok(Self {
            name,
            text,
            image_url: find(columns.image_url.as_str()),
            category: find(columns.category.as_str()),
            opening_hours: find(columns.opening_hours.as_str()),
            ticket_price: find(columns.ticket_price.as_str()),
            maps_url: find(columns.maps_url.as_str()),
            description: find(columns.description.as_str()),
            facilities: find(columns.facilities.as_str()),
        })
    }
}

/// Loads a catalog CSV into a [`Corpus`]
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    columns: CatalogColumns,
}

impl CatalogLoader {
    pub fn new(columns: CatalogColumns) -> Self {
        Self { columns }
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Corpus> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let corpus = self.load_reader(file)?;
        info!(path = %path.display(), items = corpus.len(), "catalog loaded");
        Ok(corpus)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Corpus> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let index = ColumnIndex::resolve(&headers, &self.columns)?;

        let mut items = Vec::new();
        for record in reader.records() {
            items.push(self.parse_row(&record?, &index));
        }

        Ok(Corpus::new(items))
    }

    fn parse_row(&self, record: &StringRecord, index: &ColumnIndex) -> Item {
        let cell = |i: Option<usize>| -> Option<String> {
            i.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let name = cell(Some(index.name)).unwrap_or_else(|| UNNAMED_ITEM.to_string());
        let text = cell(index.text).unwrap_or_default();

        let attributes = ItemAttributes {
            image_url: cell(index.image_url),
            category: cell(index.category)
                .unwrap_or_else(|| ItemAttributes::DEFAULT_CATEGORY.to_string()),
            opening_hours: cell(index.opening_hours)
                .unwrap_or_else(|| ItemAttributes::DEFAULT_OPENING_HOURS.to_string()),
            ticket_price: cell(index.ticket_price)
                .unwrap_or_else(|| ItemAttributes::DEFAULT_TICKET_PRICE.to_string()),
            facilities: cell(index.facilities),
            maps_url: cell(index.maps_url),
            description: cell(index.description)
                .unwrap_or_else(|| ItemAttributes::DEFAULT_DESCRIPTION.to_string()),
        };

        Item::new(name, text).with_attributes(attributes)
    }
}
