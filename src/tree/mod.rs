// Núcleo del árbol de contenido: claves posicionales y el reductor de
// movimientos drag & drop. Todo lo demás (render, selección, formularios)
// vive en `ui/` y `app/` y consume esto como una función pura.

pub mod mover;
pub mod path;

pub use mover::{DropSpot, apply_move, move_node};
pub use path::{Level, NodePath, ParentPath};
