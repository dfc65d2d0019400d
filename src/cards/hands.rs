use super::hand::Hand;

/// HandIterator enumerates every Hand of a fixed size that avoids a set
/// of blocked cards. it walks k-subsets of the 52-bit space in colex order
/// using Gosper's hack, skipping any subset that collides with the mask.
/// one u64 of state, no allocation, deterministic order.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        match self.next {
            0 => true,
            n => n.leading_zeros() < (64 - 52),
        }
    }

    /// next k-subset in colex order
    fn permute(&self) -> u64 {
        let x = self.next;
        let low = x & x.wrapping_neg();
        let carry = x + low;
        carry | (((x ^ carry) >> 2) / low)
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// size and blocked cards are fixed at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next & this.mask > 0 {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
    }

    #[test]
    fn blocked_cards_are_skipped() {
        let mask = Hand::from(0b_0110);
        let blocked = HandIterator::from((2, mask))
            .take(64)
            .any(|h| u64::from(h) & u64::from(mask) != 0);
        assert!(!blocked);
    }

    #[test]
    fn counts_the_binomial() {
        let mask = Hand::from("As Ks Qs Js Ts");
        let iter = HandIterator::from((2, mask));
        assert_eq!(iter.combinations(), 47 * 46 / 2);
        assert_eq!(HandIterator::from((2, mask)).count(), 47 * 46 / 2);
    }
}
