//! Catalog loader
//!
//! Reads the CSV product source and produces an ordered [`Catalog`].
//! Loading never fails: a missing or unusable source yields an empty
//! catalog, and per-row problems (malformed records, blank or duplicated
//! references) skip the row and surface as warnings. Prices written with a
//! spreadsheet-locale comma decimal separator are normalized at load time.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::models::{Catalog, Product};

/// Required reference column header in the source file
const COL_REFERENCE: &str = "ref";
/// Required name column header
const COL_NAME: &str = "nome";
const COL_DESCRIPTION: &str = "desc";
const COL_PRICE: &str = "valor";
const COL_IMAGE: &str = "nome_arquivo_imagem";

/// A loaded catalog plus the non-fatal problems found while loading
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub warnings: Vec<String>,
}

impl LoadedCatalog {
    fn empty() -> Self {
        Self::default()
    }

    fn with_warning(message: impl Into<String>) -> Self {
        Self {
            catalog: Catalog::default(),
            warnings: vec![message.into()],
        }
    }
}

/// Normalize a raw price field to a non-negative number.
///
/// Accepts both `19.90` and the spreadsheet-locale `19,90`. Unparseable,
/// non-finite, or negative values normalize to `0.0` (silent correction,
/// the row still loads).
pub fn normalize_price(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Load the product catalog from a CSV source.
///
/// Source columns: `ref`, `nome`, `desc`, `valor`, `nome_arquivo_imagem`.
/// Absence of the file is an empty catalog, not an error. Rows are kept in
/// file order; for duplicated references the first occurrence wins.
pub fn load_catalog(path: &Path) -> LoadedCatalog {
    if !path.exists() {
        return LoadedCatalog::empty();
    }

    let mut reader = match csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(err) => {
            return LoadedCatalog::with_warning(format!(
                "could not read {}: {}",
                path.display(),
                err
            ));
        }
    };

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            return LoadedCatalog::with_warning(format!(
                "could not read header row of {}: {}",
                path.display(),
                err
            ));
        }
    };

    let column = |name: &str| headers.iter().position(|h| h == name);

    let (reference_col, name_col) = match (column(COL_REFERENCE), column(COL_NAME)) {
        (Some(r), Some(n)) => (r, n),
        _ => {
            return LoadedCatalog::with_warning(format!(
                "{} is missing the required '{}' / '{}' columns",
                path.display(),
                COL_REFERENCE,
                COL_NAME
            ));
        }
    };
    let description_col = column(COL_DESCRIPTION);
    let price_col = column(COL_PRICE);
    let image_col = column(COL_IMAGE);

    let mut products: Vec<Product> = Vec::new();
    let mut warnings = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warnings.push(format!("skipped malformed row at line {}: {}", line, err));
                continue;
            }
        };

        let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

        let reference = field(Some(reference_col)).to_string();
        if reference.is_empty() {
            warnings.push(format!("skipped row at line {}: empty reference", line));
            continue;
        }
        if products.iter().any(|p| p.reference == reference) {
            warnings.push(format!(
                "skipped row at line {}: duplicate reference '{}'",
                line, reference
            ));
            continue;
        }

        let image = field(image_col);
        products.push(Product {
            reference,
            name: field(Some(name_col)).to_string(),
            description: field(description_col).to_string(),
            price: normalize_price(field(price_col)),
            image: (!image.is_empty()).then(|| image.to_string()),
        });
    }

    LoadedCatalog {
        catalog: Catalog::new(products),
        warnings,
    }
}

/// Session-lifetime memoization of the catalog load.
///
/// Keyed on the source path's modification time: the source is not expected
/// to mutate mid-session, but if it does, the next access reflects the new
/// state. A vanished file invalidates down to the empty catalog.
#[derive(Debug)]
pub struct CatalogCache {
    source: PathBuf,
    loaded_at: Option<SystemTime>,
    cached: Option<LoadedCatalog>,
}

impl CatalogCache {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            loaded_at: None,
            cached: None,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load the catalog, reusing the cached result while the source file's
    /// modification time is unchanged.
    pub fn load(&mut self) -> &LoadedCatalog {
        let fingerprint = self.fingerprint();
        if self.cached.is_none() || self.loaded_at != fingerprint {
            self.loaded_at = fingerprint;
            self.cached = Some(load_catalog(&self.source));
        }

        self.cached.get_or_insert_with(|| load_catalog(&self.source))
    }

    /// Drop the memoized result; the next `load` re-reads the source.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    fn fingerprint(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.source)
            .and_then(|meta| meta.modified())
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "ref,nome,desc,valor,nome_arquivo_imagem";

    fn write_catalog(dir: &Path, rows: &[&str]) -> PathBuf {
        let path = dir.join("produtos.csv");
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_normalize_price_comma_decimal() {
        assert_eq!(normalize_price("19,90"), 19.90);
        assert_eq!(normalize_price("1.234,5"), 0.0); // thousands separator is not supported
        assert_eq!(normalize_price(" 49,90 "), 49.90);
    }

    #[test]
    fn test_normalize_price_dot_decimal_passes_through() {
        assert_eq!(normalize_price("19.90"), 19.90);
        assert_eq!(normalize_price("120"), 120.0);
    }

    #[test]
    fn test_normalize_price_unparseable_is_zero() {
        assert_eq!(normalize_price("abc"), 0.0);
        assert_eq!(normalize_price(""), 0.0);
        assert_eq!(normalize_price("-5,00"), 0.0);
        assert_eq!(normalize_price("NaN"), 0.0);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let loaded = load_catalog(&dir.path().join("produtos.csv"));

        assert!(loaded.catalog.is_empty());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_load_header_only_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = write_catalog(dir.path(), &[]);

        let loaded = load_catalog(&path);
        assert!(loaded.catalog.is_empty());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_load_parses_rows_in_order() {
        let dir = tempdir().unwrap();
        let path = write_catalog(
            dir.path(),
            &[
                "B2,Calça Jeans,Corte reto,\"49,90\",calca.jpg",
                "A1,Camiseta,Algodão,19.90,camiseta.jpg",
            ],
        );

        let loaded = load_catalog(&path);
        let products = loaded.catalog.products();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].reference, "B2");
        assert_eq!(products[0].name, "Calça Jeans");
        assert_eq!(products[0].price, 49.90);
        assert_eq!(products[0].image.as_deref(), Some("calca.jpg"));
        assert_eq!(products[1].reference, "A1");
        assert_eq!(products[1].price, 19.90);
    }

    #[test]
    fn test_load_unparseable_price_is_zero() {
        let dir = tempdir().unwrap();
        let path = write_catalog(dir.path(), &["A1,Camiseta,,abc,img.jpg"]);

        let loaded = load_catalog(&path);
        assert_eq!(loaded.catalog.products()[0].price, 0.0);
        assert!(loaded.warnings.is_empty()); // silent correction
    }

    #[test]
    fn test_load_empty_image_field_is_none() {
        let dir = tempdir().unwrap();
        let path = write_catalog(dir.path(), &["A1,Camiseta,,10,"]);

        let loaded = load_catalog(&path);
        assert_eq!(loaded.catalog.products()[0].image, None);
    }

    #[test]
    fn test_load_duplicate_reference_first_wins() {
        let dir = tempdir().unwrap();
        let path = write_catalog(
            dir.path(),
            &["A1,Camiseta,,10,", "A1,Camiseta Repetida,,20,"],
        );

        let loaded = load_catalog(&path);
        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.catalog.find("A1").unwrap().name, "Camiseta");
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("duplicate reference 'A1'"));
    }

    #[test]
    fn test_load_empty_reference_is_skipped() {
        let dir = tempdir().unwrap();
        let path = write_catalog(dir.path(), &[",Sem Referência,,10,", "A1,Camiseta,,10,"]);

        let loaded = load_catalog(&path);
        assert_eq!(loaded.catalog.len(), 1);
        assert!(loaded.warnings[0].contains("empty reference"));
    }

    #[test]
    fn test_load_missing_required_columns_warns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("produtos.csv");
        fs::write(&path, "sku,titulo\nA1,Camiseta\n").unwrap();

        let loaded = load_catalog(&path);
        assert!(loaded.catalog.is_empty());
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("required"));
    }

    #[test]
    fn test_load_tolerates_missing_optional_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("produtos.csv");
        fs::write(&path, "ref,nome\nA1,Camiseta\n").unwrap();

        let loaded = load_catalog(&path);
        let product = loaded.catalog.find("A1").unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.description, "");
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_cache_reflects_source_appearing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("produtos.csv");
        let mut cache = CatalogCache::new(&path);

        assert!(cache.load().catalog.is_empty());

        fs::write(&path, format!("{}\nA1,Camiseta,,10,\n", HEADER)).unwrap();
        assert_eq!(cache.load().catalog.len(), 1);
    }

    #[test]
    fn test_cache_invalidate_forces_reload() {
        let dir = tempdir().unwrap();
        let path = write_catalog(dir.path(), &["A1,Camiseta,,10,"]);
        let mut cache = CatalogCache::new(&path);

        assert_eq!(cache.load().catalog.len(), 1);
        cache.invalidate();
        assert_eq!(cache.load().catalog.len(), 1);
    }
}
