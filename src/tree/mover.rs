use super::path::{NodePath, ParentPath};
use crate::model::{Chapter, Course, Lesson, Question, Quiz};

/// Posición relativa de un drop respecto al nodo destino. La vista del
/// árbol la deriva de la posición del puntero; el adaptador de clave
/// (`move_node`) la deriva del convenio numérico del árbol original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropSpot {
    Before,
    Inside,
    After,
}

/// Nodo extraído de su lista de hermanos, con todo su subárbol.
enum Detached {
    Chapter(Chapter),
    Lesson(Lesson),
    Quiz(Quiz),
    Question(Question),
}

/// Lista contenedora de un nivel concreto. El nivel del camino garantiza
/// que extracción e inserción siempre casan en tipo.
enum SiblingsMut<'a> {
    Chapters(&'a mut Vec<Chapter>),
    Lessons(&'a mut Vec<Lesson>),
    Quizzes(&'a mut Vec<Quiz>),
    Questions(&'a mut Vec<Question>),
}

impl SiblingsMut<'_> {
    fn len(&self) -> usize {
        match self {
            SiblingsMut::Chapters(v) => v.len(),
            SiblingsMut::Lessons(v) => v.len(),
            SiblingsMut::Quizzes(v) => v.len(),
            SiblingsMut::Questions(v) => v.len(),
        }
    }

    fn take(&mut self, index: usize) -> Option<Detached> {
        if index >= self.len() {
            return None;
        }
        Some(match self {
            SiblingsMut::Chapters(v) => Detached::Chapter(v.remove(index)),
            SiblingsMut::Lessons(v) => Detached::Lesson(v.remove(index)),
            SiblingsMut::Quizzes(v) => Detached::Quiz(v.remove(index)),
            SiblingsMut::Questions(v) => Detached::Question(v.remove(index)),
        })
    }

    fn put(&mut self, index: usize, node: Detached) -> bool {
        let index = index.min(self.len());
        match (self, node) {
            (SiblingsMut::Chapters(v), Detached::Chapter(n)) => v.insert(index, n),
            (SiblingsMut::Lessons(v), Detached::Lesson(n)) => v.insert(index, n),
            (SiblingsMut::Quizzes(v), Detached::Quiz(n)) => v.insert(index, n),
            (SiblingsMut::Questions(v), Detached::Question(n)) => v.insert(index, n),
            // niveles iguales o democión exacta garantizan tipos iguales;
            // si no casan, el movimiento se descarta entero (clon desechado)
            _ => return false,
        }
        true
    }
}

/// Resuelve la lista contenedora que vive en `parent`. Devuelve `None` si
/// algún índice intermedio está fuera de rango. Las colecciones hijas
/// existen siempre (Vec vacío por construcción), así que no hay nada que
/// crear bajo demanda.
fn siblings_at_mut<'a>(course: &'a mut Course, parent: &ParentPath) -> Option<SiblingsMut<'a>> {
    let seg = parent.segments();
    match seg.len() {
        0 => Some(SiblingsMut::Chapters(&mut course.chapters)),
        1 => Some(SiblingsMut::Lessons(&mut course.chapters.get_mut(seg[0])?.lessons)),
        2 => Some(SiblingsMut::Quizzes(
            &mut course
                .chapters
                .get_mut(seg[0])?
                .lessons
                .get_mut(seg[1])?
                .quizzes,
        )),
        3 => Some(SiblingsMut::Questions(
            &mut course
                .chapters
                .get_mut(seg[0])?
                .lessons
                .get_mut(seg[1])?
                .quizzes
                .get_mut(seg[2])?
                .questions,
        )),
        _ => None,
    }
}

/// Reductor del árbol de contenido. Calcula el curso resultante de
/// arrastrar el nodo en `drag` y soltarlo sobre el nodo en `drop`.
///
/// Reglas de nivel: un nodo solo puede reordenarse dentro de su propio
/// nivel, o soltarse sobre un nodo un nivel más arriba para convertirse
/// en su primer hijo. Cualquier otra relación devuelve `None` y el
/// llamador conserva la jerarquía anterior sin cambios.
///
/// Nunca muta su entrada: trabaja sobre un clon y lo devuelve entero,
/// de modo que el estado del formulario se reemplaza atómicamente.
pub fn apply_move(
    course: &Course,
    drag: &NodePath,
    drop: &NodePath,
    spot: DropSpot,
) -> Option<Course> {
    // Soltar un nodo sobre sí mismo es un no-op explícito.
    if drag == drop {
        return None;
    }

    let drag_depth = drag.segments().len() - 1;
    let drop_depth = drop.segments().len() - 1;
    let same_level = drop_depth == drag_depth;
    let demotion = drop_depth + 1 == drag_depth;
    if !same_level && !demotion {
        return None;
    }

    let mut next = course.clone();

    // El nodo destino tiene que existir antes de tocar nada.
    if same_level && siblings_at_mut(&mut next, &drop.parent())?.len() <= drop.index() {
        return None;
    }

    let moved = siblings_at_mut(&mut next, &drag.parent())?.take(drag.index())?;

    if demotion {
        // El destino pasa a ser la lista de hijos del propio nodo drop,
        // con inserción en la posición 0. Resolverla valida de paso que
        // el nodo drop existe.
        let child_list = ParentPath(drop.segments().to_vec());
        if !siblings_at_mut(&mut next, &child_list)?.put(0, moved) {
            return None;
        }
        return Some(next);
    }

    // Reordenación dentro del mismo nivel. La clave está en el ajuste de
    // índice cuando origen y destino son la misma lista: la extracción
    // previa ya desplazó una posición a los nodos posteriores al drag.
    let same_list = drag.parent() == drop.parent();
    let insert_ix = match spot {
        DropSpot::Before => drop.index(),
        DropSpot::Inside | DropSpot::After => {
            let mut ix = drop.index();
            if same_list && drag.index() < drop.index() {
                ix -= 1;
            }
            ix + 1
        }
    };

    if !siblings_at_mut(&mut next, &drop.parent())?.put(insert_ix, moved) {
        return None;
    }
    Some(next)
}

/// Adaptador para el formato de evento del árbol original: claves
/// posicionales string y el convenio `dropPosition - último segmento de
/// la posición del nodo`, donde exactamente `-1` significa "antes del
/// nodo" y cualquier otro valor "después (o como hijo)".
pub fn move_node(
    course: &Course,
    drag_key: &str,
    drop_key: &str,
    drop_position: i64,
    drop_node_pos: &str,
) -> Option<Course> {
    let drag = NodePath::parse(drag_key)?;
    let drop = NodePath::parse(drop_key)?;
    let anchor = drop_node_pos.rsplit('-').next()?.parse::<i64>().ok()?;
    let spot = if drop_position - anchor == -1 {
        DropSpot::Before
    } else {
        DropSpot::After
    };
    apply_move(course, &drag, &drop, spot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(title: &str) -> Question {
        Question {
            title: title.into(),
            ..Default::default()
        }
    }

    fn quiz(title: &str, questions: Vec<Question>) -> Quiz {
        Quiz {
            title: title.into(),
            questions,
            ..Default::default()
        }
    }

    fn lesson(title: &str, quizzes: Vec<Quiz>) -> Lesson {
        Lesson {
            title: title.into(),
            quizzes,
            ..Default::default()
        }
    }

    fn chapter(title: &str, lessons: Vec<Lesson>) -> Chapter {
        Chapter {
            title: title.into(),
            lessons,
            ..Default::default()
        }
    }

    fn course(chapters: Vec<Chapter>) -> Course {
        Course {
            title: "Curso".into(),
            chapters,
            ..Default::default()
        }
    }

    fn path(key: &str) -> NodePath {
        NodePath::parse(key).unwrap()
    }

    fn lesson_titles(course: &Course, chapter_ix: usize) -> Vec<&str> {
        course.chapters[chapter_ix]
            .lessons
            .iter()
            .map(|l| l.title.as_str())
            .collect()
    }

    fn three_lessons() -> Course {
        course(vec![chapter(
            "C0",
            vec![lesson("A", vec![]), lesson("B", vec![]), lesson("C", vec![])],
        )])
    }

    #[test]
    fn reorders_siblings_after_the_drop_node() {
        // [L1, L2]: arrastrar L1 después de L2 → [L2, L1]
        let before = course(vec![chapter(
            "C0",
            vec![lesson("L1", vec![]), lesson("L2", vec![])],
        )]);
        let after = apply_move(&before, &path("0-0"), &path("0-1"), DropSpot::After).unwrap();
        assert_eq!(lesson_titles(&after, 0), ["L2", "L1"]);
    }

    #[test]
    fn drag_first_after_middle_lands_between() {
        // [A,B,C]: arrastrar A después de B → [B,A,C]
        let before = three_lessons();
        let after = apply_move(&before, &path("0-0"), &path("0-1"), DropSpot::After).unwrap();
        assert_eq!(lesson_titles(&after, 0), ["B", "A", "C"]);
    }

    #[test]
    fn wire_convention_places_first_after_last() {
        // [A,B,C]: soltar A sobre C con posición relativa != -1 → [B,C,A]
        let before = three_lessons();
        let after = move_node(&before, "0-0", "0-2", 3, "0-0-2").unwrap();
        assert_eq!(lesson_titles(&after, 0), ["B", "C", "A"]);
    }

    #[test]
    fn wire_convention_minus_one_inserts_before() {
        // [A,B,C]: soltar C antes de A (relativa exactamente -1) → [C,A,B]
        let before = three_lessons();
        let after = move_node(&before, "0-2", "0-0", -1, "0-0-0").unwrap();
        assert_eq!(lesson_titles(&after, 0), ["C", "A", "B"]);
    }

    #[test]
    fn demotion_moves_lesson_into_other_chapter() {
        // La única lección de c1 pasa a ser hija de c0
        let before = course(vec![
            chapter("c0", vec![]),
            chapter("c1", vec![lesson("L1", vec![])]),
        ]);
        let after = apply_move(&before, &path("1-0"), &path("0"), DropSpot::Inside).unwrap();
        assert_eq!(lesson_titles(&after, 0), ["L1"]);
        assert!(after.chapters[1].lessons.is_empty());
    }

    #[test]
    fn demotion_inserts_at_position_zero() {
        let before = course(vec![
            chapter("c0", vec![lesson("X", vec![])]),
            chapter("c1", vec![lesson("L1", vec![])]),
        ]);
        let after = apply_move(&before, &path("1-0"), &path("0"), DropSpot::Inside).unwrap();
        assert_eq!(lesson_titles(&after, 0), ["L1", "X"]);
    }

    #[test]
    fn demotion_preserves_the_whole_subtree() {
        // La lección arrastrada conserva cuestionarios y preguntas intactos
        let moved = lesson(
            "L1",
            vec![quiz("Q1", vec![question("P1"), question("P2")])],
        );
        let before = course(vec![chapter("c0", vec![]), chapter("c1", vec![moved])]);
        let after = apply_move(&before, &path("1-0"), &path("0"), DropSpot::Inside).unwrap();

        let l = &after.chapters[0].lessons[0];
        assert_eq!(l.title, "L1");
        assert_eq!(l.quizzes.len(), 1);
        assert_eq!(l.quizzes[0].questions.len(), 2);
        assert_eq!(l.quizzes[0].questions[1].title, "P2");
    }

    #[test]
    fn rejects_moves_that_skip_levels() {
        // Pregunta sobre capítulo: diferencia de 3 niveles
        let before = course(vec![chapter(
            "c0",
            vec![lesson("L", vec![quiz("Q", vec![question("P")])])],
        )]);
        assert!(apply_move(&before, &path("0-0-0-0"), &path("0"), DropSpot::Inside).is_none());
        // Destino más profundo que el origen también se rechaza
        assert!(apply_move(&before, &path("0"), &path("0-0"), DropSpot::After).is_none());
        assert!(apply_move(&before, &path("0-0"), &path("0-0-0-0"), DropSpot::Before).is_none());
    }

    #[test]
    fn drop_on_self_is_a_noop() {
        // Lista de un elemento: soltar sobre sí mismo
        let before = course(vec![chapter("c0", vec![])]);
        assert!(apply_move(&before, &path("0"), &path("0"), DropSpot::After).is_none());
    }

    #[test]
    fn rejects_out_of_range_paths() {
        let before = three_lessons();
        assert!(apply_move(&before, &path("0-7"), &path("0-1"), DropSpot::After).is_none());
        assert!(apply_move(&before, &path("0-0"), &path("0-9"), DropSpot::After).is_none());
        assert!(apply_move(&before, &path("2-0"), &path("0-0"), DropSpot::After).is_none());
    }

    #[test]
    fn rejects_malformed_keys() {
        let before = three_lessons();
        assert!(move_node(&before, "0-x", "0-1", 1, "0-0-1").is_none());
        assert!(move_node(&before, "0-0", "", 1, "0-0-1").is_none());
        assert!(move_node(&before, "0-0", "0-1", 1, "pos").is_none());
    }

    #[test]
    fn never_mutates_its_input() {
        let before = three_lessons();
        let snapshot = serde_json::to_string(&before).unwrap();
        let _ = apply_move(&before, &path("0-0"), &path("0-2"), DropSpot::After);
        assert_eq!(serde_json::to_string(&before).unwrap(), snapshot);
    }

    #[test]
    fn every_same_level_move_is_a_permutation() {
        // Invariante de permutación: ningún nodo se duplica ni se pierde
        let before = course(vec![chapter(
            "C0",
            (0..4).map(|i| lesson(&format!("L{i}"), vec![])).collect(),
        )]);
        for drag_ix in 0..4 {
            for drop_ix in 0..4 {
                for spot in [DropSpot::Before, DropSpot::Inside, DropSpot::After] {
                    let drag = path(&format!("0-{drag_ix}"));
                    let drop = path(&format!("0-{drop_ix}"));
                    let Some(after) = apply_move(&before, &drag, &drop, spot) else {
                        assert_eq!(drag_ix, drop_ix, "solo el drop sobre sí mismo falla");
                        continue;
                    };
                    let mut titles = lesson_titles(&after, 0);
                    assert_eq!(titles.len(), 4);
                    titles.sort();
                    assert_eq!(titles, ["L0", "L1", "L2", "L3"]);
                }
            }
        }
    }

    #[test]
    fn same_level_move_between_chapters() {
        let before = course(vec![
            chapter("c0", vec![lesson("A", vec![]), lesson("B", vec![])]),
            chapter("c1", vec![lesson("X", vec![])]),
        ]);
        let after = apply_move(&before, &path("0-1"), &path("1-0"), DropSpot::After).unwrap();
        assert_eq!(lesson_titles(&after, 0), ["A"]);
        assert_eq!(lesson_titles(&after, 1), ["X", "B"]);
    }

    #[test]
    fn demotion_into_chapter_without_lessons() {
        // La lista hija vacía existe por construcción; no hay nada que crear
        let before = course(vec![chapter("c0", vec![]), chapter("c1", vec![])]);
        let mut with_lesson = before.clone();
        with_lesson.chapters[1].lessons.push(lesson("L", vec![]));
        let after =
            apply_move(&with_lesson, &path("1-0"), &path("0"), DropSpot::Inside).unwrap();
        assert_eq!(lesson_titles(&after, 0), ["L"]);
    }

    #[test]
    fn question_reorder_at_the_deepest_level() {
        let before = course(vec![chapter(
            "c0",
            vec![lesson(
                "L",
                vec![quiz("Q", vec![question("P1"), question("P2"), question("P3")])],
            )],
        )]);
        let after =
            apply_move(&before, &path("0-0-0-2"), &path("0-0-0-0"), DropSpot::Before).unwrap();
        let titles: Vec<&str> = after.chapters[0].lessons[0].quizzes[0]
            .questions
            .iter()
            .map(|q| q.title.as_str())
            .collect();
        assert_eq!(titles, ["P3", "P1", "P2"]);
    }
}
