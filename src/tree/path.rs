use serde::{Deserialize, Serialize};
use std::fmt;

/// Profundidad dentro del árbol de contenido, 0-indexada desde Chapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Chapter,
    Lesson,
    Quiz,
    Question,
}

impl Level {
    pub fn from_depth(depth: usize) -> Option<Level> {
        match depth {
            0 => Some(Level::Chapter),
            1 => Some(Level::Lesson),
            2 => Some(Level::Quiz),
            3 => Some(Level::Question),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Chapter => "Capítulo",
            Level::Lesson => "Lección",
            Level::Quiz => "Cuestionario",
            Level::Question => "Pregunta",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Level::Chapter => "📚",
            Level::Lesson => "📖",
            Level::Quiz => "📝",
            Level::Question => "❓",
        }
    }
}

/// Clave posicional de un nodo: una secuencia de índices desde la raíz,
/// p.ej. `"1-0-2"` = tercer cuestionario de la primera lección del segundo
/// capítulo. El formato string es el contrato con el árbol de la UI; el
/// resto del código trabaja siempre con el valor ya parseado.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(segments: Vec<usize>) -> Option<NodePath> {
        if segments.is_empty() || segments.len() > 4 {
            return None;
        }
        Some(NodePath(segments))
    }

    /// Parsea una clave `"c-l-q-n"`. Cualquier segmento no numérico, vacío
    /// o una profundidad fuera de los 4 niveles devuelve `None`: un evento
    /// de drag corrupto debe tratarse como no-op, nunca como pánico.
    pub fn parse(key: &str) -> Option<NodePath> {
        let segments = key
            .split('-')
            .map(|s| s.parse::<usize>().ok())
            .collect::<Option<Vec<usize>>>()?;
        NodePath::new(segments)
    }

    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    /// Último índice: la posición del nodo dentro de su lista de hermanos.
    pub fn index(&self) -> usize {
        *self.0.last().expect("NodePath nunca está vacío")
    }

    /// Camino del padre. Para un capítulo devuelve el camino vacío, que
    /// identifica la propia lista raíz de capítulos.
    pub fn parent(&self) -> ParentPath {
        ParentPath(self.0[..self.0.len() - 1].to_vec())
    }

    pub fn level(&self) -> Level {
        // new() garantiza 1..=4 segmentos
        Level::from_depth(self.0.len() - 1).expect("profundidad válida")
    }

    pub fn child(&self, index: usize) -> Option<NodePath> {
        let mut segments = self.0.clone();
        segments.push(index);
        NodePath::new(segments)
    }

    /// `true` si `other` es este nodo o un descendiente suyo.
    pub fn contains(&self, other: &NodePath) -> bool {
        other.0.len() >= self.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.0 {
            if !first {
                write!(f, "-")?;
            }
            write!(f, "{seg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Camino de una *lista* contenedora (posiblemente la raíz, camino vacío).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParentPath(pub(crate) Vec<usize>);

impl ParentPath {
    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    /// Profundidad de la lista: 0 = lista de capítulos, 1 = lecciones de un
    /// capítulo, 2 = cuestionarios, 3 = preguntas.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_keys_at_every_depth() {
        assert_eq!(NodePath::parse("1").unwrap().segments(), &[1]);
        assert_eq!(NodePath::parse("1-0").unwrap().segments(), &[1, 0]);
        assert_eq!(NodePath::parse("1-0-2").unwrap().segments(), &[1, 0, 2]);
        assert_eq!(
            NodePath::parse("1-0-2-3").unwrap().segments(),
            &[1, 0, 2, 3]
        );
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert!(NodePath::parse("").is_none());
        assert!(NodePath::parse("a-b").is_none());
        assert!(NodePath::parse("1--2").is_none());
        assert!(NodePath::parse("-1").is_none());
        assert!(NodePath::parse("1-2-3-4-5").is_none()); // más de 4 niveles
    }

    #[test]
    fn parse_is_a_pure_function_of_the_key() {
        let a = NodePath::parse("2-1-0").unwrap();
        let b = NodePath::parse("2-1-0").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "2-1-0");
    }

    #[test]
    fn levels_follow_segment_count() {
        assert_eq!(NodePath::parse("0").unwrap().level(), Level::Chapter);
        assert_eq!(NodePath::parse("0-0").unwrap().level(), Level::Lesson);
        assert_eq!(NodePath::parse("0-0-0").unwrap().level(), Level::Quiz);
        assert_eq!(NodePath::parse("0-0-0-0").unwrap().level(), Level::Question);
    }

    #[test]
    fn parent_of_chapter_is_the_root_list() {
        let path = NodePath::parse("3").unwrap();
        assert_eq!(path.parent().depth(), 0);
        assert_eq!(path.index(), 3);
    }

    #[test]
    fn contains_covers_self_and_descendants() {
        let lesson = NodePath::parse("1-0").unwrap();
        assert!(lesson.contains(&lesson));
        assert!(lesson.contains(&NodePath::parse("1-0-2").unwrap()));
        assert!(!lesson.contains(&NodePath::parse("1-1").unwrap()));
        assert!(!lesson.contains(&NodePath::parse("1").unwrap()));
    }
}
