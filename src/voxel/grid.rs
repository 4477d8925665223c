//! Voxel, material tags, and grid storage.

use glam::{IVec3, Vec3};

/// Voxel material classification.
///
/// The renderer consumes a two-bit tag, not this enum; [`Material::tag`]
/// defines the wire mapping. `Land` and `Water` share tag 1 ("solid"), and in
/// the cloud pass `Land` doubles as the tag for clouds written over empty
/// space. This tag economy is inherited from the renderer contract and kept
/// explicit here so classification logic never has to compare bare integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Material {
    /// Nothing rendered at this coordinate.
    #[default]
    Empty,
    /// Solid terrain (or a cloud voxel written over empty space).
    Land,
    /// Ocean voxel. Same wire tag as `Land`.
    Water,
    /// Night-side coastal ice highlight; rendered with tag 2.
    IceHighlight,
}

impl Material {
    /// Wire tag understood by the renderer.
    pub fn tag(self) -> u8 {
        match self {
            Material::Empty => 0,
            Material::Land | Material::Water => 1,
            Material::IceHighlight => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }
}

/// A single voxel: material tag plus RGB color.
///
/// Color channels are nominally in `[0, 1]`; the water palette can exceed 1
/// before the renderer's exposure pass, so no upper clamp is applied here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Voxel {
    pub material: Material,
    pub color: Vec3,
}

impl Voxel {
    pub const EMPTY: Voxel = Voxel {
        material: Material::Empty,
        color: Vec3::ZERO,
    };

    pub fn new(material: Material, color: Vec3) -> Self {
        Self { material, color }
    }
}

/// Read/write access to a voxel field keyed by integer coordinate.
///
/// This is the seam between the generator and whatever store the renderer
/// provides. Reads of unset or out-of-range coordinates yield
/// [`Voxel::EMPTY`].
pub trait VoxelGrid {
    fn get(&self, coord: IVec3) -> Voxel;
    fn set(&mut self, coord: IVec3, voxel: Voxel);
}

/// Maps a flattened iteration index to a coordinate in `[-extent, extent)^3`.
///
/// x varies fastest, then y, then z. This is the same ordering [`DenseGrid`] uses
/// for storage, so a flat parallel iteration touches memory sequentially.
pub fn cube_coord(index: usize, extent: i32) -> IVec3 {
    let side = (2 * extent) as usize;
    let x = (index % side) as i32 - extent;
    let y = ((index / side) % side) as i32 - extent;
    let z = (index / (side * side)) as i32 - extent;
    IVec3::new(x, y, z)
}

/// Dense voxel storage over the cube `[-extent, extent)^3`.
#[derive(Debug, Clone)]
pub struct DenseGrid {
    extent: i32,
    voxels: Vec<Voxel>,
}

impl DenseGrid {
    /// Creates an empty grid covering `[-extent, extent)^3`.
    pub fn new(extent: i32) -> Self {
        debug_assert!(extent > 0);
        let side = (2 * extent) as usize;
        Self {
            extent,
            voxels: vec![Voxel::EMPTY; side * side * side],
        }
    }

    /// Half-width of the covered cube.
    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Total number of storage cells.
    pub fn cell_count(&self) -> usize {
        self.voxels.len()
    }

    pub fn contains(&self, coord: IVec3) -> bool {
        coord.cmpge(IVec3::splat(-self.extent)).all() && coord.cmplt(IVec3::splat(self.extent)).all()
    }

    fn index(&self, coord: IVec3) -> usize {
        let side = (2 * self.extent) as usize;
        let x = (coord.x + self.extent) as usize;
        let y = (coord.y + self.extent) as usize;
        let z = (coord.z + self.extent) as usize;
        (z * side + y) * side + x
    }

    /// Iterates over `(coordinate, voxel)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, Voxel)> + '_ {
        let extent = self.extent;
        self.voxels
            .iter()
            .enumerate()
            .map(move |(i, &v)| (cube_coord(i, extent), v))
    }

    /// Counts voxels carrying the given material.
    pub fn count_material(&self, material: Material) -> usize {
        self.voxels.iter().filter(|v| v.material == material).count()
    }
}

impl VoxelGrid for DenseGrid {
    fn get(&self, coord: IVec3) -> Voxel {
        if self.contains(coord) {
            self.voxels[self.index(coord)]
        } else {
            Voxel::EMPTY
        }
    }

    fn set(&mut self, coord: IVec3, voxel: Voxel) {
        debug_assert!(self.contains(coord), "coordinate {:?} outside grid", coord);
        if self.contains(coord) {
            let idx = self.index(coord);
            self.voxels[idx] = voxel;
        }
    }
}
