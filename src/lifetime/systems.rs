use bevy::prelude::*;
use crate::lifetime::components::Expiry;

/// Ticks every lifetime and despawns entities whose time is up.
pub fn reap_expired(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Expiry)>,
) {
    for (entity, mut expiry) in query.iter_mut() {
        expiry.lifetime.tick(time.delta());
        if expiry.is_due() {
            commands.entity(entity).try_despawn();
        }
    }
}
