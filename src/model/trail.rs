use std::collections::VecDeque;

use nalgebra::Point2;

/// The path a body has traced out, as a sequence of strokes. A new stroke
/// starts whenever the trail is picked up and put down somewhere else, so no
/// line is ever drawn across the gap.
#[derive(Debug, Clone)]
pub struct Trail {
    strokes: VecDeque<VecDeque<Point2<f64>>>,
    num_points: usize,
    max_points: usize,
}

impl Trail {
    pub fn new(max_points: usize) -> Self {
        assert!(max_points >= 2, "Trail must hold at least one segment");
        Trail {
            strokes: VecDeque::new(),
            num_points: 0,
            max_points,
        }
    }

    pub fn start_at(&mut self, point: Point2<f64>) {
        self.strokes.push_back(VecDeque::new());
        self.push(point);
    }

    pub fn extend_to(&mut self, point: Point2<f64>) {
        if self.strokes.is_empty() {
            self.strokes.push_back(VecDeque::new());
        }
        self.push(point);
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.num_points = 0;
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    pub fn strokes(&self) -> impl Iterator<Item = &VecDeque<Point2<f64>>> + '_ {
        self.strokes.iter().filter(|s| !s.is_empty())
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        self.strokes
            .iter()
            .flat_map(|stroke| stroke.iter().zip(stroke.iter().skip(1)))
            .map(|(a, b)| (*a, *b))
    }

    fn push(&mut self, point: Point2<f64>) {
        if let Some(stroke) = self.strokes.back_mut() {
            stroke.push_back(point);
            self.num_points += 1;
        }

        // Drop the oldest points first
        while self.num_points > self.max_points {
            let oldest = match self.strokes.front_mut() {
                Some(stroke) => stroke,
                None => break,
            };
            if oldest.pop_front().is_some() {
                self.num_points -= 1;
            }
            if oldest.is_empty() {
                self.strokes.pop_front();
            }
        }
    }
}
