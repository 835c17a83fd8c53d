use crate::coin::{Board, Coin, Pocketed};
use crate::error::{StrikeError, Violation};
use crate::player::Player;
use crate::strike::StrikeKind;

impl Board {
    const fn reject(
        &self,
        kind: StrikeKind,
        violation: Violation,
        requested: Pocketed,
    ) -> StrikeError {
        StrikeError {
            kind,
            violation,
            requested,
            board: *self,
        }
    }

    /// Checks that every claimed coin is still on the board.
    const fn ensure_available(
        &self,
        kind: StrikeKind,
        pocketed: Pocketed,
    ) -> Result<(), StrikeError> {
        if pocketed.black > self.black() {
            return Err(self.reject(
                kind,
                Violation::ExceedsBoard {
                    coin: Coin::Black,
                    requested: pocketed.black,
                    remaining: self.black(),
                },
                pocketed,
            ));
        }

        if pocketed.white > self.white() {
            return Err(self.reject(
                kind,
                Violation::ExceedsBoard {
                    coin: Coin::White,
                    requested: pocketed.white,
                    remaining: self.white(),
                },
                pocketed,
            ));
        }

        Ok(())
    }

    const fn ensure_red(&self, kind: StrikeKind, pocketed: Pocketed) -> Result<(), StrikeError> {
        if pocketed.red && !self.has_red() {
            return Err(self.reject(kind, Violation::RedNotOnBoard, pocketed));
        }

        Ok(())
    }

    /// Strike: one point for pocketing black or white coins.
    ///
    /// Counts above what remains are accepted and empty that colour. The red
    /// flag is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if neither a black nor a white coin was pocketed.
    pub fn strike(&mut self, player: &mut Player, pocketed: Pocketed) -> Result<(), StrikeError> {
        if pocketed.black < 1 && pocketed.white < 1 {
            return Err(self.reject(
                StrikeKind::Strike,
                Violation::NothingPocketed,
                pocketed,
            ));
        }

        player.score(1);
        self.remove(Coin::Black, pocketed.black);
        self.remove(Coin::White, pocketed.white);

        Ok(())
    }

    /// Multi strike: two points for several coins, optionally with the red.
    ///
    /// # Errors
    ///
    /// Returns an error if more black or white coins are claimed than remain,
    /// if no black or white coin is claimed, or if the red is claimed after it
    /// has left the board.
    pub fn multi_strike(
        &mut self,
        player: &mut Player,
        pocketed: Pocketed,
    ) -> Result<(), StrikeError> {
        let kind = StrikeKind::MultiStrike;
        self.ensure_available(kind, pocketed)?;
        if pocketed.black == 0 && pocketed.white == 0 {
            return Err(self.reject(kind, Violation::NothingPocketed, pocketed));
        }
        self.ensure_red(kind, pocketed)?;

        player.score(2);
        self.take(pocketed);

        Ok(())
    }

    /// Red strike: three points for pocketing the red coin.
    ///
    /// # Errors
    ///
    /// Returns an error if the red coin is no longer on the board.
    pub fn red_strike(&mut self, player: &mut Player) -> Result<(), StrikeError> {
        if !self.has_red() {
            return Err(self.reject(
                StrikeKind::RedStrike,
                Violation::RedNotOnBoard,
                Pocketed::NONE.with_red(),
            ));
        }

        player.score(3);
        self.remove(Coin::Red, 1);

        Ok(())
    }

    /// Striker strike: the striker was pocketed. Costs a point and a fault.
    pub fn striker_strike(&mut self, player: &mut Player) {
        player.score(-1);
        player.foul();
    }

    /// Defunct: coins knocked off the board. Costs two points and a fault,
    /// and the coins leave play.
    ///
    /// # Errors
    ///
    /// Returns an error if no coin at all is claimed, if more black or white
    /// coins are claimed than remain, or if the red is claimed after it has
    /// left the board.
    pub fn defunct(
        &mut self,
        player: &mut Player,
        pocketed: Pocketed,
    ) -> Result<(), StrikeError> {
        let kind = StrikeKind::Defunct;
        if pocketed.is_empty() {
            return Err(self.reject(kind, Violation::NothingPocketed, pocketed));
        }
        self.ensure_available(kind, pocketed)?;
        self.ensure_red(kind, pocketed)?;

        player.score(-2);
        player.foul();
        self.take(pocketed);

        Ok(())
    }

    /// No pocket: extends the player's empty streak. Every third one in a
    /// row costs a point and a fault.
    pub fn no_pocket(&mut self, player: &mut Player) {
        player.miss();
    }
}
