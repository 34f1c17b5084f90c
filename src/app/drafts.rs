use super::*;

impl StudioApp {
    /// Guarda (o sobrescribe) un borrador con el nombre del campo de
    /// texto. Los borradores viajan dentro del estado persistido de la
    /// aplicación, así que sobreviven al cierre.
    pub fn guardar_borrador(&mut self) {
        let name = self.draft_name_input.trim().to_owned();
        if name.is_empty() {
            self.message = "⚠ Ponle un nombre al borrador.".to_owned();
            return;
        }
        let snapshot = CourseDraft {
            name: name.clone(),
            course: self.course.clone(),
        };
        match self.drafts.iter_mut().find(|d| d.name == name) {
            Some(existing) => *existing = snapshot,
            None => self.drafts.push(snapshot),
        }
        self.draft_name_input.clear();
        self.message = format!("💾 Borrador «{name}» guardado.");
    }

    pub fn cargar_borrador(&mut self, ix: usize) {
        let Some(draft) = self.drafts.get(ix) else {
            return;
        };
        let name = draft.name.clone();
        self.replace_course(draft.course.clone());
        self.selected = None;
        self.collapsed.clear();
        self.state = AppState::Outline;
        self.message = format!("📂 Borrador «{name}» cargado.");
    }

    pub fn eliminar_borrador(&mut self, ix: usize) {
        if ix < self.drafts.len() {
            let removed = self.drafts.remove(ix);
            self.message = format!("🗑 Borrador «{}» eliminado.", removed.name);
        }
    }
}
