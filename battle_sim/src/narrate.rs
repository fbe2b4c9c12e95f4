//! Plain-text lines for battle actions

use battle_core::{BattleAction, BattlePhase, BattleState, Side, WarriorRef};

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "player",
        Side::Enemy => "enemy",
    }
}

fn who(warrior: &WarriorRef) -> String {
    format!("{} {} ({})", side_name(warrior.side), warrior.card_id, warrior.lane.name())
}

fn label(kind: impl std::fmt::Debug) -> String {
    format!("{:?}", kind).to_lowercase()
}

pub fn phase_text(phase: BattlePhase) -> &'static str {
    match phase {
        BattlePhase::Ongoing => "ongoing",
        BattlePhase::PlayerWon => "player won",
        BattlePhase::EnemyWon => "enemy won",
        BattlePhase::Draw => "draw",
    }
}

/// One line per action, prefixed with the turn
pub fn describe(action: &BattleAction) -> String {
    let body = match action {
        BattleAction::Attack { attacker, target, damage, target_hp, killed, .. } => {
            let tail = if *killed { ", defeated" } else { "" };
            format!("{} hits {} for {} (hp {}){}", who(attacker), who(target), damage, target_hp, tail)
        }
        BattleAction::Evaded { attacker, target, .. } => {
            format!("{} evades {}", who(target), who(attacker))
        }
        BattleAction::Counter { source, target, damage, target_hp, killed, .. } => {
            let tail = if *killed { ", defeated" } else { "" };
            format!("{} counters {} for {} (hp {}){}", who(source), who(target), damage, target_hp, tail)
        }
        BattleAction::TacticCast { side, name, kind, magnitude, targets, .. } => {
            let hit: Vec<String> = targets
                .iter()
                .map(|t| format!("{} {:+}", t.warrior.card_id, t.amount))
                .collect();
            format!(
                "{} casts {} [{} {}] on {}",
                side_name(*side),
                name,
                label(kind),
                magnitude,
                if hit.is_empty() { "nobody".to_string() } else { hit.join(", ") }
            )
        }
        BattleAction::StatusExpired { warrior, kind, .. } => {
            format!("{} loses {}", who(warrior), label(kind))
        }
        BattleAction::FieldEventNote { name, description, effect, .. } => {
            format!("field: {} [{}] {}", name, effect, description)
        }
        BattleAction::BattleEnd { phase, .. } => format!("battle over: {}", phase_text(*phase)),
    };
    format!("[turn {:>2}] {}", action.turn(), body)
}

/// Survivors per side after a battle
pub fn summary(state: &BattleState) -> String {
    let mut lines = vec![format!("result: {} after {} turns", phase_text(state.phase), state.turn_number)];
    for side in [Side::Player, Side::Enemy] {
        for w in state.warriors(side) {
            lines.push(format!(
                "  {:<6} {:<5} {:<14} hp {:>3}/{:<3}{}",
                side_name(side),
                w.lane.name(),
                w.name,
                w.hp,
                w.max_hp,
                if w.is_alive { "" } else { "  x" }
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{CardId, Lane};

    fn front(side: Side, id: &str) -> WarriorRef {
        WarriorRef { side, lane: Lane::Front, card_id: CardId::from(id) }
    }

    #[test]
    fn test_describe_attack() {
        let action = BattleAction::Attack {
            turn: 3,
            attacker: front(Side::Player, "guan_yu"),
            target: front(Side::Enemy, "yellow_turban"),
            damage: 6,
            target_hp: 0,
            killed: true,
        };
        let line = describe(&action);
        assert!(line.starts_with("[turn  3]"));
        assert!(line.contains("guan_yu"));
        assert!(line.contains("for 6"));
        assert!(line.ends_with("defeated"));
    }

    #[test]
    fn test_describe_battle_end() {
        let action = BattleAction::BattleEnd { turn: 50, phase: BattlePhase::Draw };
        assert_eq!(describe(&action), "[turn 50] battle over: draw");
    }
}
