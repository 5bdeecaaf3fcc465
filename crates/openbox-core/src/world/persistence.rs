//! Binary save format for the grid
//!
//! Layout: a 16-byte header (magic, version, width, height) followed by one
//! 16-byte record per cell in column-major order. Multi-byte fields are
//! written in native byte order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};

use super::grid::Grid;
use crate::error::PersistenceError;
use crate::simulation::{Cell, MaterialKind};

pub const SAVE_MAGIC: [u8; 4] = *b"OBOX";
pub const SAVE_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
struct FileHeader {
    magic: [u8; 4],
    version: u32,
    width: u32,
    height: u32,
}

/// On-disk cell record, field order chosen so there is no padding
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
struct CellRecord {
    temperature: f32,
    lifetime: i32,
    color: [u8; 4],
    kind: u8,
    processed: u8,
    _reserved: [u8; 2],
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            temperature: cell.temperature,
            lifetime: cell.lifetime,
            color: cell.color,
            kind: cell.kind.as_u8(),
            processed: u8::from(cell.processed),
            _reserved: [0; 2],
        }
    }
}

impl CellRecord {
    fn to_cell(self, index: usize) -> Result<Cell, PersistenceError> {
        let kind = MaterialKind::from_u8(self.kind).ok_or(PersistenceError::InvalidMaterial {
            index,
            value: self.kind,
        })?;
        Ok(Cell {
            kind,
            color: self.color,
            temperature: self.temperature,
            lifetime: self.lifetime,
            processed: self.processed != 0,
        })
    }
}

const RECORD_SIZE: usize = std::mem::size_of::<CellRecord>();

/// Write the whole grid to `writer`
pub fn write_grid<W: Write>(grid: &Grid, mut writer: W) -> Result<(), PersistenceError> {
    let header = FileHeader {
        magic: SAVE_MAGIC,
        version: SAVE_VERSION,
        width: grid.width() as u32,
        height: grid.height() as u32,
    };
    writer.write_all(bytemuck::bytes_of(&header))?;

    for cell in grid.cells() {
        writer.write_all(bytemuck::bytes_of(&CellRecord::from(cell)))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a saved grid from `reader` into `grid`
///
/// The grid is only modified when the whole file decodes successfully.
pub fn read_grid<R: Read>(grid: &mut Grid, mut reader: R) -> Result<(), PersistenceError> {
    let mut header = FileHeader::zeroed();
    reader
        .read_exact(bytemuck::bytes_of_mut(&mut header))
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => PersistenceError::BadMagic,
            _ => PersistenceError::Io(e),
        })?;

    if header.magic != SAVE_MAGIC {
        return Err(PersistenceError::BadMagic);
    }
    if header.version != SAVE_VERSION {
        return Err(PersistenceError::UnsupportedVersion(header.version));
    }
    let expected = (grid.width() as u32, grid.height() as u32);
    if (header.width, header.height) != expected {
        return Err(PersistenceError::DimensionMismatch {
            expected,
            found: (header.width, header.height),
        });
    }

    let count = grid.len();
    let mut bytes = Vec::with_capacity(count * RECORD_SIZE);
    reader
        .take((count * RECORD_SIZE) as u64)
        .read_to_end(&mut bytes)?;
    if bytes.len() < count * RECORD_SIZE {
        return Err(PersistenceError::Truncated {
            expected: count,
            read: bytes.len() / RECORD_SIZE,
        });
    }

    let cells = bytes
        .chunks_exact(RECORD_SIZE)
        .enumerate()
        .map(|(i, chunk)| bytemuck::pod_read_unaligned::<CellRecord>(chunk).to_cell(i))
        .collect::<Result<Vec<_>, _>>()?;

    grid.replace_cells(cells);
    Ok(())
}

/// Save the grid to a file, replacing it
pub fn save_to_path(grid: &Grid, path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path)?;
    write_grid(grid, BufWriter::new(file))?;
    log::info!(
        "[SAVE] {}x{} grid written to {:?}",
        grid.width(),
        grid.height(),
        path
    );
    Ok(())
}

/// Load the grid from a file
pub fn load_from_path(grid: &mut Grid, path: &Path) -> Result<(), PersistenceError> {
    let file = File::open(path)?;
    read_grid(grid, BufReader::new(file))?;
    log::info!("[LOAD] Grid restored from {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Materials;

    fn sample_grid() -> (Grid, Materials) {
        let materials = Materials::new();
        let mut grid = Grid::new(8, 6, &materials).unwrap();
        let mut fire = Cell::new(MaterialKind::Fire, &materials);
        fire.lifetime = 42;
        fire.temperature = 612.5;
        grid.set(3, 2, fire).unwrap();
        grid.set(4, 4, Cell::new(MaterialKind::Ice, &materials)).unwrap();
        (grid, materials)
    }

    fn encode(grid: &Grid) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_grid(grid, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_record_is_sixteen_bytes() {
        assert_eq!(RECORD_SIZE, 16);
        assert_eq!(std::mem::size_of::<FileHeader>(), 16);
    }

    #[test]
    fn test_encoded_size() {
        let (grid, _) = sample_grid();
        assert_eq!(encode(&grid).len(), 16 + 8 * 6 * 16);
    }

    #[test]
    fn test_round_trip_into_fresh_grid() {
        let (grid, materials) = sample_grid();
        let bytes = encode(&grid);

        let mut restored = Grid::new(8, 6, &materials).unwrap();
        read_grid(&mut restored, bytes.as_slice()).unwrap();

        assert_eq!(restored.cells(), grid.cells());
    }

    #[test]
    fn test_bad_magic_rejected() {
        let (grid, materials) = sample_grid();
        let mut bytes = encode(&grid);
        bytes[0] = b'X';

        let mut target = Grid::new(8, 6, &materials).unwrap();
        assert!(matches!(
            read_grid(&mut target, bytes.as_slice()),
            Err(PersistenceError::BadMagic)
        ));
    }

    #[test]
    fn test_empty_input_is_not_a_save() {
        let materials = Materials::new();
        let mut target = Grid::new(8, 6, &materials).unwrap();
        assert!(matches!(
            read_grid(&mut target, std::io::empty()),
            Err(PersistenceError::BadMagic)
        ));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let (grid, materials) = sample_grid();
        let mut bytes = encode(&grid);
        bytes[4..8].copy_from_slice(&7u32.to_ne_bytes());

        let mut target = Grid::new(8, 6, &materials).unwrap();
        assert!(matches!(
            read_grid(&mut target, bytes.as_slice()),
            Err(PersistenceError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let (grid, materials) = sample_grid();
        let bytes = encode(&grid);

        let mut target = Grid::new(10, 6, &materials).unwrap();
        let err = read_grid(&mut target, bytes.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::DimensionMismatch {
                expected: (10, 6),
                found: (8, 6)
            }
        ));
    }

    #[test]
    fn test_truncated_load_leaves_grid_untouched() {
        let (grid, materials) = sample_grid();
        let bytes = encode(&grid);
        let cut = &bytes[..16 + 10 * RECORD_SIZE + 5];

        let mut target = Grid::new(8, 6, &materials).unwrap();
        target.set(1, 1, Cell::new(MaterialKind::Sand, &materials)).unwrap();
        let before = target.cells().to_vec();

        let err = read_grid(&mut target, cut).unwrap_err();

        assert!(matches!(
            err,
            PersistenceError::Truncated {
                expected: 48,
                read: 10
            }
        ));
        assert_eq!(target.cells(), before.as_slice());
    }

    #[test]
    fn test_invalid_material_rejected() {
        let (grid, materials) = sample_grid();
        let mut bytes = encode(&grid);
        // kind byte of the third record
        bytes[16 + 2 * RECORD_SIZE + 12] = 200;

        let mut target = Grid::new(8, 6, &materials).unwrap();
        assert!(matches!(
            read_grid(&mut target, bytes.as_slice()),
            Err(PersistenceError::InvalidMaterial {
                index: 2,
                value: 200
            })
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let (grid, materials) = sample_grid();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sandbox_save.dat");

        save_to_path(&grid, &path).unwrap();
        let mut restored = Grid::new(8, 6, &materials).unwrap();
        load_from_path(&mut restored, &path).unwrap();

        assert_eq!(restored.cells(), grid.cells());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let materials = Materials::new();
        let dir = tempfile::tempdir().unwrap();
        let mut grid = Grid::new(8, 6, &materials).unwrap();

        let err = load_from_path(&mut grid, &dir.path().join("missing.dat")).unwrap_err();

        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
