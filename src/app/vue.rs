// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne secondaire (expression) + ligne principale (opérande formaté) + indicateur
// - Pavé 4 colonnes, boutons “fonctions” sous le pavé
// - Historique en panneau latéral (suppression unitaire + vider)
// - Fenêtre “fonctions” : Entrée valide, Échap vide puis ferme
//
// Note :
// - Le clavier global (chiffres, opérateurs, Entrée, Retour, Échap) est coupé
//   dès qu’un champ texte a le focus ou que la fenêtre “fonctions” est ouverte.

use eframe::egui;

use crate::noyau::{Fonction, ModePourcentage, Operateur};

use super::etat::{AppCalc, Touche};
use super::son::ProfilSon;

/// Taille des touches du pavé.
const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.ui_clavier(ctx);

        egui::TopBottomPanel::top("reglages").show(ctx, |ui| {
            self.ui_reglages(ui);
        });

        if self.historique_visible {
            egui::SidePanel::right("historique")
                .resizable(true)
                .default_width(240.0)
                .show(ctx, |ui| {
                    self.ui_historique(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

            self.ui_ecran(ui);

            ui.add_space(8.0);
            self.ui_pave(ui);

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);
            self.ui_fonctions(ui);
        });

        self.ui_dialogue(ctx);
    }

    /* ------------------------ Clavier ------------------------ */

    fn ui_clavier(&mut self, ctx: &egui::Context) {
        if self.dialogue.is_some() || ctx.wants_keyboard_input() {
            return;
        }
        for touche in touches_clavier(ctx) {
            self.appuyer(touche);
        }
    }

    /* ------------------------ Réglages ------------------------ */

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.separator();

            if ui
                .button(self.preferences.theme.libelle_bascule())
                .clicked()
            {
                self.basculer_theme();
            }

            ui.checkbox(&mut self.preferences.son_actif, "Son");

            egui::ComboBox::from_id_salt("profil_son")
                .selected_text(self.preferences.profil_son.libelle())
                .show_ui(ui, |ui| {
                    for p in ProfilSon::TOUS {
                        ui.selectable_value(&mut self.preferences.profil_son, p, p.libelle());
                    }
                });

            ui.separator();

            let libelle = if self.historique_visible {
                "Masquer l’historique"
            } else {
                "Historique"
            };
            if ui.button(libelle).clicked() {
                self.cliquer();
                self.historique_visible = !self.historique_visible;
            }
        });
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let p = self.projection();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(p.indicateur).size(20.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&p.secondaire).monospace().weak());
                    });
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&p.principal).monospace().size(36.0));
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                // colonne de droite, de haut en bas : ÷ × - +
                let mut colonne = Operateur::TOUS.into_iter().rev();

                self.bouton_touche(ui, "AC", Touche::ToutEffacer);
                self.bouton_touche(ui, "DEL", Touche::Effacer);
                ui.label("");
                if let Some(op) = colonne.next() {
                    self.bouton_operateur(ui, op);
                }
                ui.end_row();

                for (rangee, op) in [['7', '8', '9'], ['4', '5', '6'], ['1', '2', '3']]
                    .into_iter()
                    .zip(colonne)
                {
                    for c in rangee {
                        self.bouton_touche(ui, &c.to_string(), Touche::Chiffre(c));
                    }
                    self.bouton_operateur(ui, op);
                    ui.end_row();
                }

                self.bouton_touche(ui, ".", Touche::Chiffre('.'));
                self.bouton_touche(ui, "0", Touche::Chiffre('0'));
                ui.label("");
                self.bouton_touche(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton_touche(ui, op.symbole(), Touche::Operateur(op));
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(
            TAILLE_TOUCHE,
            egui::Button::new(egui::RichText::new(label).size(20.0)),
        );
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    /* ------------------------ Fonctions annexes ------------------------ */

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.label("Fonctions :");
        ui.horizontal_wrapped(|ui| {
            for f in Fonction::TOUTES {
                if ui.button(f.titre()).clicked() {
                    self.ouvrir_fonction(f);
                }
            }
        });
    }

    fn ui_dialogue(&mut self, ctx: &egui::Context) {
        let Some(fonction) = self.dialogue.as_ref().map(|d| d.fonction) else {
            return;
        };

        let (entree, echap) =
            ctx.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::Escape)));

        // Alt+1 / Alt+2 / Alt+3 : choix du mode sans quitter la saisie
        let raccourci_mode = if fonction.deux_saisies() {
            ctx.input(|i| {
                i.events.iter().find_map(|ev| match ev {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if modifiers.alt => ModePourcentage::depuis_jeton(key.name()).ok(),
                    _ => None,
                })
            })
        } else {
            None
        };

        let mut ouvert = true;
        let mut action = None;
        egui::Window::new(fonction.titre())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut ouvert)
            .show(ctx, |ui| {
                action = self.ui_contenu_dialogue(ui);
            });

        if !ouvert {
            self.fermer_fonction();
            return;
        }

        match action.or(raccourci_mode.map(ActionDialogue::Mode)) {
            Some(ActionDialogue::Mode(mode)) => self.changer_mode(mode),
            Some(ActionDialogue::Valider) => self.valider_fonction(),
            None if entree => self.valider_fonction(),
            None if echap => self.echap_fonction(),
            None => {}
        }
    }

    fn ui_contenu_dialogue(&mut self, ui: &mut egui::Ui) -> Option<ActionDialogue> {
        let d = self.dialogue.as_mut()?;
        let mut action = None;

        let (indice1, indice2) = if d.fonction.deux_saisies() {
            ui.horizontal_wrapped(|ui| {
                for mode in ModePourcentage::TOUS {
                    if ui.radio(d.mode == mode, mode.libelle()).clicked() {
                        action = Some(ActionDialogue::Mode(mode));
                    }
                }
            });
            d.mode.indices()
        } else {
            ("Saisir un nombre", "")
        };

        let resp = ui.add(
            egui::TextEdit::singleline(&mut d.saisie)
                .hint_text(indice1)
                .desired_width(240.0),
        );
        if d.focus {
            resp.request_focus();
            d.focus = false;
        }

        if d.fonction.deux_saisies() {
            ui.add(
                egui::TextEdit::singleline(&mut d.saisie2)
                    .hint_text(indice2)
                    .desired_width(240.0),
            );
        }

        if ui.button("Entrée").clicked() {
            action = Some(ActionDialogue::Valider);
        }

        if !d.resultat.is_empty() {
            ui.separator();
            ui.monospace(&d.resultat);
        }

        action
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("Historique ({})", self.historique.len()));
            if ui.button("Vider").clicked() {
                self.vider_historique();
            }
        });
        ui.separator();

        if self.historique.is_empty() {
            ui.weak("Aucun historique pour l’instant");
            return;
        }

        let mut a_supprimer = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, e) in self.historique.entrees().enumerate() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.monospace(e.expression());
                            ui.strong(format!("= {}", e.resultat()));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("×").on_hover_text("Supprimer").clicked() {
                                a_supprimer = Some(index);
                            }
                        });
                    });
                    ui.separator();
                }
            });

        if let Some(index) = a_supprimer {
            self.supprimer_entree(index);
        }
    }
}

/// Touches du clavier physique reçues pendant la frame.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut touches = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    touches.extend(t.chars().filter_map(Touche::depuis_caractere));
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => touches.push(Touche::Egal),
                    egui::Key::Backspace | egui::Key::Delete => touches.push(Touche::Effacer),
                    egui::Key::Escape => touches.push(Touche::ToutEffacer),
                    _ => {}
                },
                _ => {}
            }
        }
        touches
    })
}

#[derive(Clone, Copy, Debug)]
enum ActionDialogue {
    Mode(ModePourcentage),
    Valider,
}
